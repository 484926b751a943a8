//! main file for the server

pub mod model;
mod controller;
mod routes;
mod service;
mod state;
mod store;
mod util;

use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use log::info;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::store::file::FileStore;
use crate::server::store::memory::MemoryStore;
use crate::server::store::Store;

/// Permissive CORS headers stamped on every response.
pub(crate) fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, DELETE, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

/// Run the server
pub async fn run(ServerConfig { addr, orders_file, strict_reads, env_name }: ServerConfig) -> std::io::Result<()> {
    let store = match orders_file {
        Some(path) => {
            let store = FileStore::new(path);
            info!("storing orders in {}", store.path().display());
            Store::File(store)
        }
        None => {
            info!("storing orders in memory, they are lost on restart");
            Store::Memory(MemoryStore::new())
        }
    };
    let state = web::Data::new(AppState::new(store, strict_reads, env_name));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_headers())
            .app_data(state.clone())
            .configure(routes::configure)
    })
        .bind(addr)?
        .run()
        .await
}
