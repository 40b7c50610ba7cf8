//! HTTP front end: `POST /suggest` and its CORS preflight.

use std::net::{Ipv6Addr, SocketAddr};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info, warn};

use crate::dictionary::Dictionary;
use crate::wire::{self, Outcome, RequestError, WireChoices};

/// Handler state. The dictionary is loaded once and only ever read.
#[derive(Debug, Clone)]
pub struct AppState {
    dictionary: Arc<Dictionary>,
}

impl AppState {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

pub fn router(dictionary: Arc<Dictionary>) -> Router {
    Router::new()
        .route("/suggest", post(suggest).options(preflight))
        .with_state(AppState::new(dictionary))
}

/// Serve on `[::]:port` until ctrl-c.
pub async fn serve(dictionary: Arc<Dictionary>, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, words = dictionary.len(), "starting Rust server");

    axum::serve(listener, router(dictionary))
        .with_graceful_shutdown(async {
            // An error here means no signal handler; keep serving.
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        })
        .await
}

async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
        .into_response()
}

async fn suggest(State(state): State<AppState>, body: Bytes) -> Response {
    let mut response = match answer(state, body).await {
        Ok(Outcome::Words(words)) => Json(words).into_response(),
        Ok(outcome) => outcome.message().unwrap_or_default().into_response(),
        Err(HandlerError::Request(err)) => {
            warn!(error = %err, "rejected suggest request");
            (StatusCode::BAD_REQUEST, err.help_text()).into_response()
        }
        Err(err @ HandlerError::Worker) => {
            error!(error = %err, "suggest request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    };
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

async fn answer(state: AppState, body: Bytes) -> Result<Outcome, HandlerError> {
    let choices = WireChoices::from_json(&body)?;
    let outcome = tokio::task::spawn_blocking(move || wire::answer(&state.dictionary, choices))
        .await
        .map_err(|_| HandlerError::Worker)??;
    Ok(outcome)
}

#[derive(thiserror::Error, Debug)]
enum HandlerError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("solver worker failed")]
    Worker,
}
