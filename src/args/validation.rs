use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::controller::db_prefill::PrefillDocument;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file.trim());
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable, is not json, or is not a prefill document
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Checks the document has the prefill shape, see [`PrefillDocument`].
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    if !json.is_object() {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    }
    PrefillDocument::deserialize(json)
        .map(|_| ())
        .map_err(|e| format!("The json file is not in the correct format: {e}"))
}
