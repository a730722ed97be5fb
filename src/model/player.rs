use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NewPlayer {
    pub name: String,
}
