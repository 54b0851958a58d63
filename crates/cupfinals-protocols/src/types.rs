//! Records, choices and the session batch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One World Cup final as read from the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    year: i32,
    winner: String,
    score: String,
    runner_up: String,
}

impl FinalResult {
    pub fn new(
        year: i32,
        winner: impl Into<String>,
        score: impl Into<String>,
        runner_up: impl Into<String>,
    ) -> Self {
        Self {
            year,
            winner: winner.into(),
            score: score.into(),
            runner_up: runner_up.into(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn winner(&self) -> &str {
        &self.winner
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn runner_up(&self) -> &str {
        &self.runner_up
    }
}

impl fmt::Display for FinalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year={}, Winner='{}', Score='{}', RunnerUp='{}'",
            self.year, self.winner, self.score, self.runner_up
        )
    }
}

/// Cell of a table row that the extractor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Year,
    Winner,
    Score,
    RunnerUp,
}

impl RowField {
    /// All fields in extraction (and column) order.
    pub const ALL: [RowField; 4] = [
        RowField::Year,
        RowField::Winner,
        RowField::Score,
        RowField::RunnerUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RowField::Year => "year",
            RowField::Winner => "winner",
            RowField::Score => "score",
            RowField::RunnerUp => "runner-up",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user decided for one extracted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserChoice {
    Append,
    Skip,
    Quit,
    /// No decision arrived before the confirmation wait expired.
    Timeout,
}

impl UserChoice {
    /// Choice applied when the confirmation wait expires.
    pub const TIMEOUT_DEFAULT: UserChoice = UserChoice::Skip;

    pub fn as_str(&self) -> &'static str {
        match self {
            UserChoice::Append => "append",
            UserChoice::Skip => "skip",
            UserChoice::Quit => "quit",
            UserChoice::Timeout => "timeout",
        }
    }

    /// Resolve `Timeout` to the choice the flow acts on.
    pub fn effective(self) -> UserChoice {
        match self {
            UserChoice::Timeout => Self::TIMEOUT_DEFAULT,
            other => other,
        }
    }
}

impl fmt::Display for UserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records confirmed for append during one run, in confirmation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionBatch {
    results: Vec<FinalResult>,
}

impl SessionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: FinalResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn as_slice(&self) -> &[FinalResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<FinalResult> {
        self.results
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
