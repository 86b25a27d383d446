use crate::app_config::AppConfig;
use crate::school_loader::load_school_names;
use tracing::info;

mod app_config;
mod domain;
mod geo_location_deserializer;
mod places;
mod report;
mod school_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = places::new_client()?;

    let names = load_school_names(config.schools().file()).await?;
    info!("✅  Loaded {} school names", names.len());

    let schools = places::resolve_schools(&client, &config, &names).await;

    let sorted = report::north_to_south(schools);
    report::print_report(&sorted);

    Ok(())
}
