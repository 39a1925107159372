//! Web backend for tongyin.

use eyre::WrapErr;
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_url = env::var("SERVER_URL")
        .wrap_err("Missing SERVER_URL")?
        .parse::<SocketAddr>()
        .wrap_err("Invalid SERVER_URL")?;

    let site_root = PathBuf::from(env::var("SITE_ROOT").unwrap_or_else(|_| "./build".to_string()));
    let assets_root =
        PathBuf::from(env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()));
    let dictionary_path = env::var("DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assets_root.join("chinese_homophone_char.txt"));
    let dictionary_timeout = env::var("DICTIONARY_TIMEOUT_SECS")
        .ok()
        .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
        .transpose()
        .wrap_err("Invalid DICTIONARY_TIMEOUT_SECS")?;

    let router = tongyin_server::router_from_vars(
        site_root,
        assets_root,
        dictionary_path,
        dictionary_timeout,
    );

    tracing::info!("Starting server at {server_url}");
    let server_addr = TcpListener::bind(server_url)
        .await
        .wrap_err("Failed to bind to address")?;
    axum::serve(server_addr, router.into_make_service())
        .await
        .wrap_err("Failed to start server")?;
    Ok(())
}
