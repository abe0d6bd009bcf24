use anyhow::Context;
use listings::configuration::get_configuration;
use listings::db::{ListingStore, MongoStore};
use listings::startup::run;
use listings::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("listings".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        db_host = %settings.database.host,
        db_name = %settings.database.database_name,
        production = settings.production,
        "Connecting to MongoDB"
    );

    let store = MongoStore::connect(&settings.database)
        .await
        .context("Failed to configure the MongoDB client.")?;
    store
        .ping()
        .await
        .context("Failed to reach MongoDB.")?;
    tracing::info!("Pinged your deployment. Successfully connected to MongoDB");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {address}"))?;

    let store: Arc<dyn ListingStore> = Arc::new(store);
    run(listener, store, settings).await?.await?;

    Ok(())
}
