use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::config::roster::default_roster;
use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};

/// Opens the configured database, creating the schema when missing and
/// seeding the default roster if enabled.
pub fn prepare_database(config: &AppConfig) -> Result<DbPool> {
    let db_path = &config.server.database_path;
    info!("Using database {}", db_path);

    let pool = database::create_pool(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;
    initialize(&pool, config.server.seed_on_startup)?;
    Ok(pool)
}

pub fn initialize(pool: &DbPool, seed: bool) -> Result<()> {
    let conn = database::get_connection(pool)?;
    database::setup::initialize_schema(&conn)?;

    if seed {
        database::seed::seed_if_empty(&conn, &default_roster(), Utc::now())?;
    }
    Ok(())
}
