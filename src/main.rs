use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use log::{error, info};

use rusty_handicap::args;
use rusty_handicap::controller::db_prefill::{db_prefill, seed_default_courses};
use rusty_handicap::controller::router;
use rusty_handicap::storage::SqliteStorage;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let storage = SqliteStorage::open(&args.db_name)?;
    storage.init_schema()?;

    if !args.combined_sql_script.is_empty() {
        info!("running startup script {:?}", args.db_startup_script);
        storage.execute_script(&args.combined_sql_script)?;
    }

    if let Some(json) = &args.db_populate_json {
        db_prefill(json, &storage)?;
    } else if storage.course_count()? == 0 {
        seed_default_courses(&storage)?;
    }

    info!("listening on {}:{}", args.bind, args.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(storage.clone()))
            .configure(router::configure)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
