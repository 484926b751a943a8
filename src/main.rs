//! application entry point

use crate::server::model::config::ServerConfig;
use log::{info, warn};
use std::env;
use std::path::Path;
use std::str::FromStr;
use derive_more::Display;

mod server;

const CONFIG_LOADING_FAILED_MSG: &str = "failed to load server config, aborting";

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_result = match env {
        Env::Prod | Env::Stg => Ok(()), // injected by the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv_result {
        warn!("no usable .env.dev, relying on process env, {}", e);
    }

    // c. run app
    let config = ServerConfig::from_env(env.to_string()).expect(CONFIG_LOADING_FAILED_MSG);

    info!("App is starting in env={} on {}", env, config.addr);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    #[display("dev")]
    Dev,
    #[display("stg")]
    Stg,
    #[display("prod")]
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
