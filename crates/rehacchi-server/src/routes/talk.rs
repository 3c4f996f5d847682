//! Reference-talk routes — one voice-chat surface, one Slack-command
//! surface, and a JSON preview of the fused reply.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;

pub fn root_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/command/reference_talk", get(reference_talk))
        .route("/command/reference_talk/from_slack", post(reference_talk_from_slack))
        .route("/command/reference_talk/preview", get(reference_talk_preview))
}

#[derive(Debug, Deserialize)]
pub struct TalkQuery {
    #[serde(default)]
    content: String,
    #[serde(default)]
    user_name: Option<String>,
}

/// Fields of a Slack slash-command callback we care about; the rest of
/// the form is ignored.
#[derive(Debug, Deserialize)]
pub struct SlackCommand {
    #[serde(default)]
    text: String,
    #[serde(default)]
    user_name: Option<String>,
}

// ---------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------

async fn root() -> &'static str {
    "hello"
}

// ---------------------------------------------------------------
// Voice surface
// ---------------------------------------------------------------

/// The voice-chat surface: the reply body is the concatenated voice
/// renderings, links are pushed to the chat channel on the side.
async fn reference_talk(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TalkQuery>,
) -> String {
    debug!("Voice talk from {:?}: {:?}", query.user_name, query.content);
    let utterances = state.pipeline.respond(&query.content).await;
    let reply: String = utterances.iter().filter_map(|u| u.voice.clone()).collect();
    for utterance in utterances {
        if let Some(link) = utterance.voice_link {
            let state = state.clone();
            tokio::spawn(async move {
                state.notifier.post(&link).await;
            });
        }
    }
    reply
}

// ---------------------------------------------------------------
// Slack command surface
// ---------------------------------------------------------------

/// The text-chat surface: everything goes back through the channel the
/// command came from, so the immediate response body stays empty.
async fn reference_talk_from_slack(
    State(state): State<Arc<AppState>>,
    Form(command): Form<SlackCommand>,
) -> String {
    debug!("Slack talk from {:?}: {:?}", command.user_name, command.text);
    let utterances = state.pipeline.respond(&command.text).await;
    let message: String = utterances.iter().filter_map(|u| u.text.clone()).collect();
    state.notifier.post(&message).await;
    for utterance in &utterances {
        if let Some(link) = &utterance.text_link {
            state.notifier.post(link).await;
        }
    }
    String::new()
}

// ---------------------------------------------------------------
// Preview
// ---------------------------------------------------------------

/// Full fused reply as JSON, for debugging surfaces.
async fn reference_talk_preview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TalkQuery>,
) -> Json<serde_json::Value> {
    let utterances = state.pipeline.respond(&query.content).await;
    Json(serde_json::json!({
        "content": query.content,
        "utterances": utterances,
    }))
}
