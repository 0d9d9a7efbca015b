mod bot;
mod config;
mod data;
mod error;
mod hook;
mod model;
mod module;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    tracing::info!("Sweetiebot {} starting", env!("CARGO_PKG_VERSION"));

    let db = startup::connect_to_database(&config).await?;

    let client = bot::start::init_bot(&config, db).await?;

    bot::start::start_bot(client).await
}
