use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signet_issuer::{routes, AppState, IssuerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match IssuerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let state = web::Data::new(AppState::new(&config));

    tracing::info!("signet issuer listening on port {port}");
    tracing::info!(
        "Allow-list: {} domain(s), localhost origins {}",
        state.policy.domain_count(),
        if state.policy.localhost_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    tracing::info!("  GET  http://localhost:{port}{}", routes::SIGNATURE_PATH);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
