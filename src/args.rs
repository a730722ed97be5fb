use clap::Parser;
use std::fs;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent or a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    CleanArgs::new(args)
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the database name or bind address is empty
    pub fn validate(&self) -> Result<(), String> {
        if self.db_name.trim().is_empty() {
            return Err("Database name is required".to_string());
        }
        if self.bind.trim().is_empty() {
            return Err("Bind address is required".to_string());
        }
        Ok(())
    }
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if one of the `;`-separated startup scripts cannot be read
    pub fn new(args: Args) -> Result<Self, String> {
        let mut combined_sql_script = String::new();
        if let Some(db_startup_script) = &args.db_startup_script {
            for file in db_startup_script.split(';') {
                let file = file.trim();
                if file.is_empty() {
                    continue;
                }
                let script = fs::read_to_string(file)
                    .map_err(|e| format!("Failed to read SQL startup script '{file}': {e}"))?;
                combined_sql_script.push_str(&script);
                // push a newline just in case
                combined_sql_script.push('\n');
            }
        }

        Ok(Self {
            db_name: args.db_name,
            db_startup_script: args.db_startup_script,
            db_populate_json: args.db_populate_json,
            combined_sql_script,
            bind: args.bind,
            port: args.port,
        })
    }
}
