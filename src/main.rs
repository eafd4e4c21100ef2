#![allow(non_snake_case)]

use shop_with_blog::client;

#[cfg(feature = "server")]
use shop_with_blog::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            model::app::{AppState, StoreSettings},
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Database error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(store_name = %config.store_name, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState {
            db,
            settings: StoreSettings::from(&config),
        });
        router = router.merge(server_routes);

        Ok(router)
    })
}
