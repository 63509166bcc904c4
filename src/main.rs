use std::error::Error;

use gen_ai_service::telemetry;
use tracing::Level;
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env if present; a missing file is
    // fine where the environment is injected from outside.
    let _ = dotenvy::dotenv();

    // Provider-client events go through the library's own compact layer;
    // everything else through the default one. The filters keep the two
    // disjoint so no event renders twice.
    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info,api=info", Level::DEBUG))
        .with(telemetry::layer())
        .with(fmt::layer().with_filter(filter::filter_fn(|meta| {
            !meta.target().starts_with(telemetry::TARGET_PREFIX)
        })))
        .try_init()?;

    api::start().await?;

    Ok(())
}
