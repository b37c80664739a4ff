// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use log::info;

use lancaster::application::commands::{get_box_office_summary, get_low_sales_alerts};
use lancaster::application::state::AppState;
use lancaster::config::AppConfig;
use lancaster::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use lancaster::services::LogNotifier;
use lancaster::store::EntityStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("loading configuration")?;

    // 2. MARKETING DATABASE
    let pool = Arc::new(create_connection_pool(&config).context("opening marketing database")?);
    let db_stats = {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("migrating marketing database")?;
        verify_database_integrity(&conn).context("checking marketing database")?;
        get_database_stats(&conn)?
    };

    // 3. STORE & SERVICES
    let store = if config.seed_sample_data {
        EntityStore::with_sample_data()
    } else {
        EntityStore::new()
    };
    let state = AppState::build(store, pool, Arc::new(LogNotifier));

    let counts = state.venue_service.counts();
    info!("Back office ready with {} records", counts.total());

    // 4. SUMMARY
    let records: serde_json::Map<String, serde_json::Value> = counts
        .entries
        .iter()
        .map(|(kind, count)| (kind.collection_name().to_string(), (*count).into()))
        .collect();

    let low_sales = get_low_sales_alerts(&state).map_err(|e| anyhow::anyhow!(e.message))?;

    let summary = serde_json::json!({
        "database": {
            "path": config.database_path.display().to_string(),
            "size_bytes": db_stats.size_bytes,
            "shows": db_stats.show_count,
            "bookings": db_stats.booking_count,
        },
        "records": records,
        "box_office": get_box_office_summary(&state),
        "low_sales_alerts": low_sales,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
