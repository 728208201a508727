//! Handler error type and its HTTP mapping.

use axum::{
  extract::{rejection::JsonRejection, FromRequest},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{error, warn};

use crate::protocol::ErrorOut;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum HubError {
  #[error("Please enter some text before saving.")]
  EmptyJournalEntry,

  #[error("Unknown challenge id: {0}")]
  UnknownChallenge(usize),

  #[error("Unknown growth area: {0}")]
  UnknownArea(String),

  #[error("'{level}' is not a level of '{area}'")]
  InvalidSelection { area: String, level: String },

  #[error("Invalid request body: {0}")]
  InvalidBody(String),

  #[error("No file was uploaded")]
  MissingUpload,

  #[error("Failed to read upload: {0}")]
  Upload(String),

  #[error("Unsupported file type '{0}'; upload a .csv or .xlsx file")]
  UnsupportedUpload(String),

  #[error("Could not parse upload: {0}")]
  UnparseableUpload(String),

  #[error("Failed to encode CSV: {0}")]
  Encode(String),

  #[error(transparent)]
  Store(#[from] StoreError),
}

impl HubError {
  pub fn status(&self) -> StatusCode {
    match self {
      HubError::EmptyJournalEntry
      | HubError::UnknownChallenge(_)
      | HubError::UnknownArea(_)
      | HubError::InvalidSelection { .. }
      | HubError::InvalidBody(_)
      | HubError::MissingUpload
      | HubError::Upload(_) => StatusCode::BAD_REQUEST,
      HubError::UnsupportedUpload(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      HubError::UnparseableUpload(_) => StatusCode::UNPROCESSABLE_ENTITY,
      HubError::Encode(_) | HubError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<JsonRejection> for HubError {
  fn from(rejection: JsonRejection) -> Self {
    HubError::InvalidBody(rejection.body_text())
  }
}

/// `Json` extractor whose rejections (bad syntax, wrong shape, missing
/// content-type) answer with the same `{"error"}` body as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(HubError))]
pub struct ApiJson<T>(pub T);

impl IntoResponse for HubError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(target: "growth_hub", error = %self, "Request failed");
    } else {
      warn!(target: "growth_hub", error = %self, %status, "Request rejected");
    }
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
