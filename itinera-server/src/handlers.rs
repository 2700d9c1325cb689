use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::stream::{Stream, StreamExt};
use serde_json::json;
use std::convert::Infallible;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use itinera_agent::{Content, Part};
use itinera_core::response::{normalize, StructuredResponse};
use itinera_core::Error;

use crate::state::AppState;

/// Error wrapper mapping core errors onto HTTP statuses
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    pub user_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub new_message: NewMessage,
}

fn default_app_name() -> String {
    "itinera".to_string()
}

/// The incoming message; the role field is accepted but the gateway
/// always forwards the message as "user".
#[derive(Debug, serde::Deserialize)]
pub struct NewMessage {
    pub parts: Vec<Part>,
    #[serde(default = "default_role")]
    #[allow(dead_code)]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Events pushed over the chat SSE stream
enum ChatEvent {
    SessionId(String),
    Response(StructuredResponse),
    Error(String),
}

impl ChatEvent {
    fn data(&self) -> String {
        match self {
            ChatEvent::SessionId(id) => json!({ "session_id": id }).to_string(),
            ChatEvent::Response(resp) => serde_json::to_string(resp)
                .unwrap_or_else(|_| json!({ "error": "serialization failed" }).to_string()),
            ChatEvent::Error(msg) => json!({ "error": msg }).to_string(),
        }
    }
}

pub async fn maps_key_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let key = state
        .config
        .maps
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| Error::Config("Google Maps API key not configured on the server".into()))?;
    Ok(Json(json!({ "apiKey": key })))
}

pub async fn itinerary_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let itinerary = state.itinerary.full()?;
    Ok(Json(serde_json::to_value(itinerary).map_err(Error::from)?))
}

pub async fn day_handler(
    State(state): State<AppState>,
    Path(day_number): Path<u32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let day = state.itinerary.day(day_number)?;
    Ok(Json(serde_json::to_value(day).map_err(Error::from)?))
}

pub async fn activity_handler(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let activity = state.itinerary.activity(&activity_id)?;
    Ok(Json(serde_json::to_value(activity).map_err(Error::from)?))
}

/// Chat gateway: streams the session id, then the normalized model
/// response (or an error event) as the terminal message of the stream.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // The turn runs detached; if the client disconnects, sends fail and
    // the task winds down on its own.
    tokio::spawn(async move {
        if let Err(e) = run_turn(state, req, &event_tx).await {
            tracing::error!("Error during agent turn: {}", e);
            let _ = event_tx.send(ChatEvent::Error(e.to_string()));
        }
    });

    let stream =
        UnboundedReceiverStream::new(event_rx).map(|event| Ok(Event::default().data(event.data())));

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn run_turn(
    state: AppState,
    req: ChatRequest,
    event_tx: &mpsc::UnboundedSender<ChatEvent>,
) -> anyhow::Result<()> {
    // A stale or foreign session id falls back to a fresh session
    // rather than an error.
    let session = match &req.session_id {
        Some(id) => match state.sessions.get(&req.app_name, &req.user_id, id).await {
            Some(session) => session,
            None => state.sessions.create(&req.app_name, &req.user_id).await,
        },
        None => state.sessions.create(&req.app_name, &req.user_id).await,
    };

    // Always the first event, before any model latency, so the client
    // can persist the id for subsequent turns.
    let _ = event_tx.send(ChatEvent::SessionId(session.id.clone()));

    let message = Content::user(req.new_message.parts);
    let user_text = message.first_text().unwrap_or_default().to_string();

    let mut events = state.agent.run(&session, message).await?;

    let mut final_text: Option<String> = None;
    while let Some(event) = events.next().await {
        let event = event?;
        if let Some(text) = event.content.as_ref().and_then(|c| c.first_text()) {
            final_text = Some(text.to_string());
        }
    }

    match final_text {
        Some(raw) => {
            tracing::info!("Agent raw response: {}", raw);
            let response = normalize(&raw);
            let _ = event_tx.send(ChatEvent::Response(response));
            state
                .sessions
                .record_turn(&session.id, &user_text, &raw)
                .await;
        }
        None => {
            // Degenerate turn: only the session-id event goes out.
            tracing::warn!("Agent did not return any content");
        }
    }

    Ok(())
}
