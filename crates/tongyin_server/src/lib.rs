//! Web backend for tongyin.

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use handlers::{convert, dictionary};
use std::{fmt::Debug, ops::Deref, path::PathBuf, sync::Arc, time::Duration};
use tongyin::{Dictionary, FileSource};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct TongyinState(Arc<TongyinStateCore>);

impl Deref for TongyinState {
    type Target = TongyinStateCore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for TongyinState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tongyin")
    }
}

pub struct TongyinStateCore {
    pub dictionary: Dictionary<FileSource>,
    /// The built frontend.
    pub site_root: PathBuf,
    /// Static assets, including the dictionary file.
    pub assets_root: PathBuf,
}

impl TongyinState {
    pub fn new(core: TongyinStateCore) -> Self {
        Self(Arc::new(core))
    }
}

pub fn router(state: TongyinState) -> Router<()> {
    // the frontend handles its own routes, so unknown paths get the index page
    let site = ServeDir::new(&state.site_root)
        .fallback(ServeFile::new(state.site_root.join("index.html")));
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/dictionary", get(dictionary::stats))
                .route("/convert", post(convert::convert)),
        )
        .nest_service("/assets", ServeDir::new(&state.assets_root))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn router_from_vars(
    site_root: PathBuf,
    assets_root: PathBuf,
    dictionary_path: PathBuf,
    dictionary_timeout: Option<Duration>,
) -> Router<()> {
    let mut dictionary = Dictionary::new(FileSource::new(dictionary_path));
    if let Some(timeout) = dictionary_timeout {
        dictionary = dictionary.with_timeout(timeout);
    }
    let state = TongyinState::new(TongyinStateCore {
        dictionary,
        site_root,
        assets_root,
    });

    // load speculatively so the first conversion doesn't wait,
    // a failure here is retried on first use
    let preload = state.clone();
    tokio::spawn(async move {
        if let Err(err) = preload.dictionary.load().await {
            tracing::warn!("Failed to preload the dictionary: {err}");
        }
    });

    self::router(state)
}
