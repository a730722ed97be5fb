use clap::Parser;
use serde_json::Value;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The sqlite filename, or `:memory:` for a throwaway database.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        env = "DATABASE_PATH",
        default_value = "golf.db"
    )]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with `;`.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub db_startup_script: Option<String>,
    /// Players, courses and rounds to load on startup.
    #[arg(
        long,
        value_name = "PREFILL_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
    #[arg(short = 'b', long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub db_populate_json: Option<Value>,
    pub combined_sql_script: String,
    pub bind: String,
    pub port: u16,
}
