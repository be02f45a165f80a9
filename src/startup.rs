use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{health_check, index, join_waitlist};
use crate::store::{PostgresWaitlistStore, WaitlistStore};
use crate::utils::json_error_handler;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let store = PostgresWaitlistStore::new(connection_pool);
        if configuration.database.migrate_on_startup {
            store.migrate().await?;
        }

        Self::build_with_store(configuration, Arc::new(store)).await
    }

    /// Build the application on top of an already constructed store.
    pub async fn build_with_store(
        configuration: Settings,
        store: Arc<dyn WaitlistStore>,
    ) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let host_origin_url = format!("{}:{}", configuration.application.base_url, port);
        let server = run(listener, store, host_origin_url, configuration.hosts.client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(configuration.acquire_timeout())
        .connect_lazy_with(configuration.connect_options())
}

fn run(
    listener: TcpListener,
    store: Arc<dyn WaitlistStore>,
    host_origin_url: String,
    client_url: String,
) -> Result<Server, anyhow::Error> {
    let store: Data<dyn WaitlistStore> = Data::from(store);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(client_url.as_str())
            .allowed_origin(host_origin_url.as_str())
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(&[
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .block_on_origin_mismatch(true)
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .service(index::get)
            .service(health_check::get)
            .service(join_waitlist::post)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
