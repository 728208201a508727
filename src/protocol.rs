//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ChallengeResponse, Section, Table};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    NewChallenge,
    SubmitChallenge {
        #[serde(rename = "challengeId")]
        challenge_id: usize,
        response: String,
    },
    SubmitQuiz {
        #[serde(default)]
        answers: Vec<Option<String>>,
    },
    JournalEntry {
        entry: String,
    },
    ListJournal,
    GrowthSnapshot {
        #[serde(default)]
        selections: HashMap<String, String>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Challenge {
        challenge: ChallengeOut,
    },
    Saved {
        message: String,
    },
    QuizResult {
        #[serde(flatten)]
        result: QuizResultOut,
    },
    Journal {
        entries: Vec<JournalEntryOut>,
    },
    Growth {
        rows: Vec<GrowthRow>,
    },
    Error {
        message: String,
    },
}

/// DTO used by both WS and HTTP for challenge delivery.
#[derive(Debug, Serialize)]
pub struct ChallengeOut {
    pub id: usize,
    pub challenge: String,
}

//
// HTTP request/response DTOs
//

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct SectionOut {
    pub id: Section,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct HomeOut {
    pub title: &'static str,
    pub heading: &'static str,
    pub image_url: &'static str,
    pub why: &'static str,
    pub how_to: Vec<&'static str>,
    pub quote: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeResponseIn {
    #[serde(rename = "challengeId")]
    pub challenge_id: usize,
    pub response: String,
}

#[derive(Serialize)]
pub struct ChallengeResponsesOut {
    pub responses: Vec<ChallengeResponse>,
}

/// Success acknowledgement for mutating calls.
#[derive(Debug, Serialize)]
pub struct SavedOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct QuizQuestionOut {
    pub question: &'static str,
    pub options: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct QuizOut {
    pub questions: Vec<QuizQuestionOut>,
}

#[derive(Debug, Deserialize)]
pub struct QuizIn {
    #[serde(default)]
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResultOut {
    pub score: usize,
    pub total: usize,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct JournalIn {
    pub entry: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JournalEntryOut {
    pub index: usize,
    pub text: String,
}

#[derive(Serialize)]
pub struct JournalOut {
    pub entries: Vec<JournalEntryOut>,
}

#[derive(Serialize)]
pub struct PreviewOut {
    pub file_name: String,
    pub total_rows: usize,
    pub preview: Table,
}

#[derive(Serialize)]
pub struct GrowthAreaOut {
    pub area: &'static str,
    pub levels: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct GrowthOut {
    pub areas: Vec<GrowthAreaOut>,
}

#[derive(Debug, Deserialize)]
pub struct GrowthIn {
    #[serde(default)]
    pub selections: HashMap<String, String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GrowthRow {
    pub area: String,
    pub level: String,
}

#[derive(Serialize)]
pub struct GrowthSnapshotOut {
    pub rows: Vec<GrowthRow>,
    pub insight: &'static str,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}
