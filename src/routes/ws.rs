//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::HubError;
use crate::logic::*;
use crate::protocol::{ChallengeOut, ClientWsMessage, QuizResultOut, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "growth_hub", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "growth_hub", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "growth_hub", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "growth_hub", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "growth_hub", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
pub(crate) async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match dispatch(msg, state).await {
    Ok(reply) => reply,
    Err(e) => ServerWsMessage::Error { message: e.to_string() },
  }
}

async fn dispatch(msg: ClientWsMessage, state: &AppState) -> Result<ServerWsMessage, HubError> {
  let reply = match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::NewChallenge => {
      let (id, challenge) = pick_challenge(&mut rand::thread_rng());
      info!(target: "challenge", id, "WS new_challenge served");
      ServerWsMessage::Challenge { challenge: ChallengeOut { id, challenge: challenge.to_string() } }
    }

    ClientWsMessage::SubmitChallenge { challenge_id, response } => {
      let entry = challenge_response(challenge_id, response)?;
      state.record_challenge(entry).await?;
      ServerWsMessage::Saved { message: "Response saved! Keep growing!".into() }
    }

    ClientWsMessage::SubmitQuiz { answers } => {
      let (score, total) = score_quiz(&answers);
      ServerWsMessage::QuizResult { result: QuizResultOut { score, total, text: score_text(score, total) } }
    }

    ClientWsMessage::JournalEntry { entry } => {
      validate_journal_entry(&entry)?;
      state.add_journal_entry(entry).await?;
      ServerWsMessage::Saved { message: "Journal entry saved!".into() }
    }

    ClientWsMessage::ListJournal => {
      let journal = state.journal().await;
      ServerWsMessage::Journal { entries: journal_newest_first(&journal) }
    }

    ClientWsMessage::GrowthSnapshot { selections } => {
      ServerWsMessage::Growth { rows: growth_snapshot(&selections)? }
    }
  };
  Ok(reply)
}
