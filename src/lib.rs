pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod score;
pub mod storage;

pub use error::AppError;
pub use storage::{SqliteStorage, Storage, StorageError};
