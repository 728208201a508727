//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{
  extract::{Multipart, State},
  http::header,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::convert::{self, UploadKind, CONVERTED_FILE_NAME, CSV_MEDIA_TYPE};
use crate::domain::Section;
use crate::error::{ApiJson, HubError};
use crate::logic::*;
use crate::protocol::*;
use crate::seeds::{GROWTH_INSIGHT, HOME, PROGRESS_AREAS, QUIZ};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_sections() -> impl IntoResponse {
  let sections = Section::ALL
    .iter()
    .map(|s| SectionOut { id: *s, title: s.title() })
    .collect::<Vec<_>>();
  Json(sections)
}

#[instrument(level = "info")]
pub async fn http_get_home() -> impl IntoResponse {
  Json(HomeOut {
    title: HOME.title,
    heading: HOME.heading,
    image_url: HOME.image_url,
    why: HOME.why,
    how_to: HOME.how_to.to_vec(),
    quote: HOME.quote,
  })
}

/// A fresh prompt on every call; the pick is not sticky.
#[instrument(level = "info")]
pub async fn http_get_challenge() -> impl IntoResponse {
  let (id, challenge) = pick_challenge(&mut rand::thread_rng());
  info!(target: "challenge", id, "HTTP challenge served");
  Json(ChallengeOut { id, challenge: challenge.to_string() })
}

#[instrument(level = "info", skip(state, body), fields(challenge_id = body.challenge_id, response_len = body.response.len()))]
pub async fn http_post_challenge_response(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<ChallengeResponseIn>,
) -> Result<impl IntoResponse, HubError> {
  let entry = challenge_response(body.challenge_id, body.response)?;
  state.record_challenge(entry).await?;
  Ok(Json(SavedOut { message: "Response saved! Keep growing!".into() }))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_challenge_responses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(ChallengeResponsesOut { responses: state.challenges().await })
}

#[instrument(level = "info")]
pub async fn http_get_quiz() -> impl IntoResponse {
  let questions = QUIZ
    .iter()
    .map(|q| QuizQuestionOut { question: q.question, options: q.options.to_vec() })
    .collect();
  Json(QuizOut { questions })
}

#[instrument(level = "info", skip(body), fields(answers = body.answers.len()))]
pub async fn http_post_quiz(ApiJson(body): ApiJson<QuizIn>) -> impl IntoResponse {
  let (score, total) = score_quiz(&body.answers);
  info!(target: "growth_hub", score, total, "HTTP quiz scored");
  Json(QuizResultOut { score, total, text: score_text(score, total) })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_journal(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let journal = state.journal().await;
  Json(JournalOut { entries: journal_newest_first(&journal) })
}

#[instrument(level = "info", skip(state, body), fields(entry_len = body.entry.len()))]
pub async fn http_post_journal(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<JournalIn>,
) -> Result<impl IntoResponse, HubError> {
  validate_journal_entry(&body.entry)?;
  state.add_journal_entry(body.entry).await?;
  Ok(Json(SavedOut { message: "Journal entry saved!".into() }))
}

#[instrument(level = "info", skip(state, multipart))]
pub async fn http_post_convert_preview(
  State(state): State<Arc<AppState>>,
  multipart: Multipart,
) -> Result<impl IntoResponse, HubError> {
  let (file_name, bytes) = read_upload(multipart).await?;
  let table = convert::parse_upload(&file_name, &bytes)?;
  info!(target: "convert", %file_name, rows = table.rows.len(), "Upload previewed");
  Ok(Json(PreviewOut {
    file_name,
    total_rows: table.rows.len(),
    preview: convert::preview(&table, state.config.preview_rows),
  }))
}

#[instrument(level = "info", skip(multipart))]
pub async fn http_post_convert(multipart: Multipart) -> Result<impl IntoResponse, HubError> {
  let (file_name, bytes) = read_upload(multipart).await?;
  let table = convert::parse_upload(&file_name, &bytes)?;
  let csv = convert::to_csv(&table)?;
  info!(target: "convert", %file_name, rows = table.rows.len(), out_bytes = csv.len(), "Upload converted to CSV");
  let disposition = format!("attachment; filename=\"{CONVERTED_FILE_NAME}\"");
  Ok((
    [
      (header::CONTENT_TYPE, CSV_MEDIA_TYPE.to_string()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    csv,
  ))
}

#[instrument(level = "info")]
pub async fn http_get_growth() -> impl IntoResponse {
  let areas = PROGRESS_AREAS
    .iter()
    .map(|a| GrowthAreaOut { area: a.name, levels: a.levels.to_vec() })
    .collect();
  Json(GrowthOut { areas })
}

#[instrument(level = "info", skip(body), fields(selections = body.selections.len()))]
pub async fn http_post_growth(ApiJson(body): ApiJson<GrowthIn>) -> Result<impl IntoResponse, HubError> {
  let rows = growth_snapshot(&body.selections)?;
  Ok(Json(GrowthSnapshotOut { rows, insight: GROWTH_INSIGHT }))
}

/// Pull the `file` field out of a multipart body. The extension filter runs
/// before the field body is read.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), HubError> {
  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| HubError::Upload(e.to_string()))?
  {
    if field.name() != Some("file") {
      continue;
    }
    let file_name = field.file_name().unwrap_or_default().to_string();
    UploadKind::from_file_name(&file_name)?;
    let bytes = field.bytes().await.map_err(|e| HubError::Upload(e.to_string()))?;
    return Ok((file_name, bytes.to_vec()));
  }
  Err(HubError::MissingUpload)
}
