//! HTTP server for GitHub webhooks.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use labeler::{Outcome, ReconcileError, Reconciler};

use crate::config::Config;
use crate::signature::verify_webhook_signature;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Configuration.
    pub config: Config,
    /// Label reconciler.
    pub reconciler: Arc<Reconciler>,
}

/// Build the HTTP router for the labeler service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhooks/github", post(github_webhook_handler))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Readiness check endpoint.
async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    if state.config.github_token.is_none() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(json!({ "status": "ready" })))
}

/// Handle incoming GitHub webhooks.
///
/// This handler:
/// 1. Verifies the `X-Hub-Signature-256` header (if a secret is configured)
/// 2. Hands the event name and raw payload to the reconciler
/// 3. Reports what the reconciler did
pub async fn github_webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let delivery_id = headers
        .get("X-GitHub-Delivery")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    info!(
        event_type = %event_type,
        delivery_id = %delivery_id,
        "Received GitHub webhook"
    );

    if let Some(secret) = &state.config.webhook_secret {
        let Some(signature) = headers
            .get("X-Hub-Signature-256")
            .and_then(|v| v.to_str().ok())
        else {
            warn!("Missing X-Hub-Signature-256 header");
            return Err(StatusCode::UNAUTHORIZED);
        };

        if !verify_webhook_signature(&body, signature, secret) {
            warn!("Invalid webhook signature");
            return Err(StatusCode::UNAUTHORIZED);
        }
        debug!("Webhook signature verified");
    }

    match state.reconciler.handle_event(event_type, &body).await {
        Ok(Outcome::Reconciled(summary)) => {
            info!(
                owner = %summary.owner,
                repo = %summary.repo,
                number = summary.number,
                labels = ?summary.desired_labels,
                "Reconciled PR labels"
            );
            Ok(Json(json!({
                "status": "ok",
                "owner": summary.owner,
                "repo": summary.repo,
                "pr_number": summary.number,
                "labels": summary.desired_labels
            })))
        }
        Ok(Outcome::Ignored { reason }) => {
            debug!(event_type = %event_type, reason = %reason, "Event ignored");
            Ok(Json(json!({
                "status": "ignored",
                "reason": reason
            })))
        }
        Err(ReconcileError::Payload(e)) => {
            error!(error = %e, "Failed to parse webhook payload");
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            error!(error = %e, "Reconciliation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
