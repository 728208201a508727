//! Flat-file JSON store for the `Document`.
//!
//! `load` and `save` are the only operations. Saves overwrite the whole file
//! (no temp file + rename), so a crash mid-write can leave a truncated store;
//! the next `load` then fails with `StoreError::Corrupt` instead of resetting.
//!
//! The store itself holds no lock. Callers that share it across requests
//! serialize load/modify/save themselves (see `AppState`).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::Document;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Failed to read store {path}: {source}")]
  Read { path: PathBuf, source: std::io::Error },

  #[error("Store {path} does not hold a valid document: {source}")]
  Corrupt { path: PathBuf, source: serde_json::Error },

  #[error("Failed to encode document for {path}: {source}")]
  Encode { path: PathBuf, source: serde_json::Error },

  #[error("Failed to write store {path}: {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

#[derive(Clone, Debug)]
pub struct Store {
  path: PathBuf,
}

impl Store {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read the document, or the empty default when no file exists yet.
  #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
  pub fn load(&self) -> Result<Document, StoreError> {
    let raw = match std::fs::read_to_string(&self.path) {
      Ok(s) => s,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!(target: "store", path = %self.path.display(), "No store file yet; starting empty");
        return Ok(Document::default());
      }
      Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
    };

    let doc: Document = serde_json::from_str(&raw)
      .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })?;
    debug!(target: "store", challenges = doc.challenges.len(), journal = doc.journal.len(), "Store loaded");
    Ok(doc)
  }

  /// Overwrite the backing file with `doc`, pretty-printed with 4-space indent.
  #[instrument(level = "debug", skip(self, doc), fields(path = %self.path.display()))]
  pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc
      .serialize(&mut ser)
      .map_err(|source| StoreError::Encode { path: self.path.clone(), source })?;

    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        std::fs::create_dir_all(parent)
          .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
      }
    }

    std::fs::write(&self.path, buf)
      .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
    debug!(target: "store", challenges = doc.challenges.len(), journal = doc.journal.len(), "Store saved");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ChallengeResponse;

  fn sample() -> Document {
    Document {
      challenges: vec![
        ChallengeResponse { challenge: "Write three things you are grateful for today.".into(), response: "sun, tea, friends".into() },
        ChallengeResponse { challenge: "Challenge yourself to learn something new today.".into(), response: String::new() },
      ],
      journal: vec!["first".into(), "  second, with spaces  ".into(), "third\nline".into()],
    }
  }

  #[test]
  fn missing_file_loads_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("data.json"));
    let doc = store.load().unwrap();
    assert_eq!(doc, Document { challenges: vec![], journal: vec![] });
    assert!(!store.path().exists(), "load must not create the file");
  }

  #[test]
  fn save_then_load_reproduces_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("data.json"));
    let doc = sample();
    store.save(&doc).unwrap();
    assert_eq!(store.load().unwrap(), doc);
  }

  #[test]
  fn save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("data.json"));
    store.save(&sample()).unwrap();
    let smaller = Document { challenges: vec![], journal: vec!["only".into()] };
    store.save(&smaller).unwrap();
    assert_eq!(store.load().unwrap(), smaller);
  }

  #[test]
  fn saved_file_uses_four_space_indent_and_both_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("data.json"));
    store.save(&Document::default()).unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "{\n    \"challenges\": [],\n    \"journal\": []\n}");
  }

  #[test]
  fn save_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("nested").join("data.json"));
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
  }

  #[test]
  fn invalid_json_is_reported_not_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{\"challenges\": [").unwrap();
    let err = Store::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "got {err:?}");
    // file left untouched
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"challenges\": [");
  }

  #[test]
  fn missing_key_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"challenges": []}"#).unwrap();
    let err = Store::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
  }

  #[test]
  fn reads_file_written_by_other_tools() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
      &path,
      r#"{"journal": ["a"], "challenges": [{"response": "r", "challenge": "c"}]}"#,
    )
    .unwrap();
    let doc = Store::new(&path).load().unwrap();
    assert_eq!(doc.journal, vec!["a".to_string()]);
    assert_eq!(doc.challenges[0], ChallengeResponse { challenge: "c".into(), response: "r".into() });
  }
}
