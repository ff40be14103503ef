mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    tracing::info!(
        "Watching bot uptime: role \"{}\", channel \"{}\"",
        config.notify_role_name,
        config.notify_channel_name
    );

    bot::start::start_bot(&config).await
}
