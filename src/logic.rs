//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Picking a daily challenge prompt (random source is injected)
//!   - Scoring quiz answers
//!   - Journal validation and newest-first listing
//!   - Building the growth tracker snapshot

use std::collections::HashMap;

use rand::Rng;

use crate::domain::ChallengeResponse;
use crate::error::HubError;
use crate::protocol::{GrowthRow, JournalEntryOut};
use crate::seeds::{CHALLENGE_PROMPTS, PROGRESS_AREAS, QUIZ};
use crate::util::is_blank;

/// Uniform pick from the fixed prompt pool. Returns `(id, prompt)`.
pub fn pick_challenge<R: Rng>(rng: &mut R) -> (usize, &'static str) {
  let id = rng.gen_range(0..CHALLENGE_PROMPTS.len());
  (id, CHALLENGE_PROMPTS[id])
}

/// Pair a response with the prompt it answers. The id must name a fixed prompt.
pub fn challenge_response(id: usize, response: String) -> Result<ChallengeResponse, HubError> {
  let challenge = CHALLENGE_PROMPTS
    .get(id)
    .ok_or(HubError::UnknownChallenge(id))?;
  Ok(ChallengeResponse { challenge: challenge.to_string(), response })
}

/// Count of positions whose selection equals the recorded answer.
/// Missing or `None` selections are unset and never match.
pub fn score_quiz(answers: &[Option<String>]) -> (usize, usize) {
  let score = QUIZ
    .iter()
    .enumerate()
    .filter(|(i, q)| matches!(answers.get(*i), Some(Some(a)) if a.as_str() == q.answer))
    .count();
  (score, QUIZ.len())
}

pub fn score_text(score: usize, total: usize) -> String {
  format!("Your Score: {score}/{total}")
}

/// Entries are stored raw; only whitespace-only text is refused.
pub fn validate_journal_entry(entry: &str) -> Result<(), HubError> {
  if is_blank(entry) {
    return Err(HubError::EmptyJournalEntry);
  }
  Ok(())
}

/// Newest first, each labelled with its 1-based position counted from the oldest.
pub fn journal_newest_first(journal: &[String]) -> Vec<JournalEntryOut> {
  journal
    .iter()
    .enumerate()
    .rev()
    .map(|(i, text)| JournalEntryOut { index: i + 1, text: text.clone() })
    .collect()
}

/// Resolve the chosen level per area, in fixed area order.
/// Areas left out default to their first (lowest) level.
pub fn growth_snapshot(selections: &HashMap<String, String>) -> Result<Vec<GrowthRow>, HubError> {
  if let Some(unknown) = selections
    .keys()
    .find(|k| !PROGRESS_AREAS.iter().any(|a| a.name == k.as_str()))
  {
    return Err(HubError::UnknownArea(unknown.clone()));
  }

  PROGRESS_AREAS
    .iter()
    .map(|area| -> Result<GrowthRow, HubError> {
      let level = match selections.get(area.name) {
        None => area.levels[0],
        Some(chosen) => area
          .levels
          .iter()
          .copied()
          .find(|l| *l == chosen.as_str())
          .ok_or_else(|| HubError::InvalidSelection {
            area: area.name.to_string(),
            level: chosen.clone(),
          })?,
      };
      Ok(GrowthRow { area: area.name.to_string(), level: level.to_string() })
    })
    .collect()
}
