mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    tracing::info!(
        %port,
        login_delay = ?config.login_delay,
        cookie_secure = config.cookie_secure,
        "configuration loaded"
    );

    let state = state::AppState::new(views::sample_catalog(), config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "restaurant console listening");
    axum::serve(listener, app).await.expect("server failed");
}
