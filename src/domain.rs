//! Domain models: the persisted document, fixed content records, and sections.

use serde::{Deserialize, Serialize};

/// One submitted answer to a daily challenge prompt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeResponse {
  pub challenge: String,
  pub response: String,
}

/// The single persisted record. Both collections are append-only.
///
/// Both keys are required on disk; a file missing either one is treated as
/// corrupt rather than silently repaired.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
  pub challenges: Vec<ChallengeResponse>,
  pub journal: Vec<String>,
}

/// Fixed quiz record. `answer` is always one of `options`.
#[derive(Clone, Debug)]
pub struct QuizQuestion {
  pub question: &'static str,
  pub options: [&'static str; 3],
  pub answer: &'static str,
}

/// Self-assessment axis with three levels ordered low → high.
#[derive(Clone, Debug)]
pub struct ProgressArea {
  pub name: &'static str,
  pub levels: [&'static str; 3],
}

/// The six mutually exclusive views, in navigation order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
  Home,
  DailyChallenge,
  InteractiveQuiz,
  JournalAndReflections,
  FileConverter,
  GrowthTracker,
}

impl Section {
  pub const ALL: [Section; 6] = [
    Section::Home,
    Section::DailyChallenge,
    Section::InteractiveQuiz,
    Section::JournalAndReflections,
    Section::FileConverter,
    Section::GrowthTracker,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Section::Home => "Home",
      Section::DailyChallenge => "Daily Challenge",
      Section::InteractiveQuiz => "Interactive Quiz",
      Section::JournalAndReflections => "Journal & Reflections",
      Section::FileConverter => "File Converter",
      Section::GrowthTracker => "Growth Tracker",
    }
  }
}

/// Spreadsheet-like table: ordered rows under named columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
  pub columns: Vec<String>,
  pub rows: Vec<Vec<String>>,
}
