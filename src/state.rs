//! Application state: configuration, the document store, and the in-memory document.
//!
//! The document is loaded once at startup. Every mutation goes through
//! `AppState::mutate`, which holds the write lock across build → save → swap
//! (the save itself runs on the blocking pool),
//! so concurrent requests cannot interleave a save and memory always matches
//! what was last written to disk.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::HubConfig;
use crate::domain::{ChallengeResponse, Document};
use crate::store::{Store, StoreError};
use crate::util::trunc_for_log;

#[derive(Clone)]
pub struct AppState {
    pub config: HubConfig,
    pub store: Store,
    pub document: Arc<RwLock<Document>>,
}

impl AppState {
    /// Build state from config: open the store and load the document.
    /// A store that exists but cannot be parsed is an error, never reset.
    #[instrument(level = "info", skip_all, fields(data_path = %config.data_path))]
    pub fn load(config: HubConfig) -> Result<Self, StoreError> {
        let store = Store::new(&config.data_path);
        let document = store.load()?;
        info!(
            target: "growth_hub",
            challenges = document.challenges.len(),
            journal = document.journal.len(),
            "Startup document inventory"
        );
        Ok(Self {
            config,
            store,
            document: Arc::new(RwLock::new(document)),
        })
    }

    /// Apply `f` to a copy of the document, persist it, then publish it.
    /// On save failure the in-memory document is left unchanged.
    async fn mutate<F>(&self, f: F) -> Result<Document, StoreError>
    where
        F: FnOnce(&mut Document),
    {
        let mut current = self.document.write().await;
        let mut next = current.clone();
        f(&mut next);

        // file I/O runs off the async workers; the write lock stays held until the swap
        let store = self.store.clone();
        let next = tokio::task::spawn_blocking(move || store.save(&next).map(|()| next))
            .await
            .map_err(|e| StoreError::Write {
                path: self.store.path().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, e),
            })??;
        *current = next.clone();
        Ok(next)
    }

    /// Append a challenge response and save. Returns the new response count.
    #[instrument(level = "info", skip(self, entry), fields(response_len = entry.response.len()))]
    pub async fn record_challenge(&self, entry: ChallengeResponse) -> Result<usize, StoreError> {
        let prompt = trunc_for_log(&entry.challenge, 40);
        let doc = self.mutate(|d| d.challenges.push(entry)).await?;
        info!(target: "challenge", %prompt, total = doc.challenges.len(), "Challenge response saved");
        Ok(doc.challenges.len())
    }

    /// Append a journal entry (raw text) and save. Returns the new entry count.
    #[instrument(level = "info", skip(self, entry), fields(entry_len = entry.len()))]
    pub async fn add_journal_entry(&self, entry: String) -> Result<usize, StoreError> {
        let doc = self.mutate(|d| d.journal.push(entry)).await?;
        info!(target: "journal", total = doc.journal.len(), "Journal entry saved");
        Ok(doc.journal.len())
    }

    /// Journal entries, oldest first.
    pub async fn journal(&self) -> Vec<String> {
        self.document.read().await.journal.clone()
    }

    /// Challenge responses, oldest first.
    pub async fn challenges(&self) -> Vec<ChallengeResponse> {
        self.document.read().await.challenges.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> HubConfig {
        HubConfig {
            data_path: dir.path().join("data.json").to_string_lossy().into_owned(),
            ..HubConfig::default()
        }
    }

    #[tokio::test]
    async fn journal_appends_in_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load(config_in(&dir)).unwrap();
        for (i, text) in ["first", "second", "third"].into_iter().enumerate() {
            assert_eq!(state.add_journal_entry(text.into()).await.unwrap(), i + 1);
        }
        assert_eq!(state.journal().await, vec!["first", "second", "third"]);
        assert_eq!(state.store.load().unwrap().journal, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn state_reloads_what_it_saved() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load(config_in(&dir)).unwrap();
        state
            .record_challenge(ChallengeResponse { challenge: "c".into(), response: "r".into() })
            .await
            .unwrap();
        state.add_journal_entry("note".into()).await.unwrap();

        let reopened = AppState::load(config_in(&dir)).unwrap();
        assert_eq!(*reopened.document.read().await, *state.document.read().await);
        assert_eq!(reopened.challenges().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_save_leaves_memory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be makes every write fail
        let data_path = dir.path().join("data.json");
        let state = AppState::load(HubConfig {
            data_path: data_path.to_string_lossy().into_owned(),
            ..HubConfig::default()
        })
        .unwrap();
        std::fs::create_dir(&data_path).unwrap();

        let err = state.add_journal_entry("lost".into()).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }), "got {err:?}");
        assert!(state.journal().await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_entries_are_all_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::load(config_in(&dir)).unwrap());

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let state = state.clone();
                tokio::spawn(async move { state.add_journal_entry(format!("entry {i}")).await })
            })
            .collect();
        let mut counts = Vec::new();
        for t in tasks {
            counts.push(t.await.unwrap().unwrap());
        }
        counts.sort_unstable();
        assert_eq!(counts, (1..=20).collect::<Vec<_>>());

        let on_disk = state.store.load().unwrap();
        assert_eq!(on_disk.journal.len(), 20);
        assert_eq!(on_disk, *state.document.read().await);
        for i in 0..20 {
            assert!(on_disk.journal.contains(&format!("entry {i}")), "missing entry {i}");
        }
    }

    #[tokio::test]
    async fn corrupt_store_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), "not json").unwrap();
        assert!(matches!(AppState::load(config_in(&dir)), Err(StoreError::Corrupt { .. })));
    }
}
