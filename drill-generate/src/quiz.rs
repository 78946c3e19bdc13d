use ::std::fmt;
use ::std::fs;
use ::std::path::{Path, PathBuf};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generate::{
    formatter::{LABEL_LIST_SEPARATOR, LABEL_QUOTIENT, LABEL_REMAINDER},
    question::Problem,
};

#[derive(Debug, Clone)]
pub struct QuizSession {
    problems: Vec<Problem>,
    user_answers: Vec<String>,
    current: usize,
    started_on: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub correct: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuizReport {
    pub results: Vec<QuizResult>,
    pub correct: usize,
    pub total: usize,
    pub elapsed_secs: i64,
    pub finished_on: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub taken_on: NaiveDateTime,
    pub correct: usize,
    pub total: usize,
    pub elapsed_secs: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreHistory {
    records: Vec<ScoreRecord>,
}

pub const RECENT_SCORES: usize = 10;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to read score history from {0}")]
    ReadError(PathBuf),
    #[error("score history in {0} is malformed")]
    ParseError(PathBuf),
    #[error("failed to write score history to {0}")]
    WriteError(PathBuf),
}

impl QuizSession {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self::started_at(problems, Utc::now().naive_utc())
    }
    pub fn started_at(problems: Vec<Problem>, started_on: NaiveDateTime) -> Self {
        Self {
            user_answers: Vec::with_capacity(problems.len()),
            problems,
            current: 0,
            started_on,
        }
    }
    pub fn total(&self) -> usize {
        self.problems.len()
    }
    /// Zero-based index of the problem awaiting an answer.
    pub fn position(&self) -> usize {
        self.current
    }
    pub fn current(&self) -> Option<&Problem> {
        self.problems.get(self.current)
    }
    pub fn is_finished(&self) -> bool {
        self.current >= self.problems.len()
    }
    /// Records the answer to the current problem and moves on. Returns
    /// whether the session is now finished.
    pub fn submit<T: Into<String>>(&mut self, answer: T) -> bool {
        if !self.is_finished() {
            self.user_answers.push(answer.into());
            self.current += 1;
        }
        self.is_finished()
    }
    pub fn finish(self) -> QuizReport {
        self.finish_at(Utc::now().naive_utc())
    }
    /// Grades every problem; anything left unanswered counts as wrong.
    pub fn finish_at(self, finished_on: NaiveDateTime) -> QuizReport {
        let results: Vec<QuizResult> = self
            .problems
            .iter()
            .enumerate()
            .map(|(i, problem)| {
                let user_answer = self.user_answers.get(i).cloned().unwrap_or_default();
                QuizResult {
                    correct: is_correct(problem, &user_answer),
                    question: problem.display_text.clone(),
                    correct_answer: problem.answer.clone(),
                    user_answer,
                }
            })
            .collect();
        let correct = results.iter().filter(|result| result.correct).count();
        let elapsed_secs = (finished_on - self.started_on).num_seconds().max(0);
        tracing::info!("Quiz finished with {correct}/{} correct in {elapsed_secs}s", results.len());
        QuizReport {
            total: results.len(),
            results,
            correct,
            elapsed_secs,
            finished_on,
        }
    }
}

impl QuizReport {
    pub fn mistakes(&self) -> impl Iterator<Item = &QuizResult> {
        self.results.iter().filter(|result| !result.correct)
    }
    pub fn score_record(&self) -> ScoreRecord {
        ScoreRecord {
            taken_on: self.finished_on,
            correct: self.correct,
            total: self.total,
            elapsed_secs: self.elapsed_secs,
        }
    }
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn record(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    /// Up to `n` most recent records, oldest first.
    pub fn recent(&self, n: usize) -> &[ScoreRecord] {
        &self.records[self.records.len().saturating_sub(n)..]
    }
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.correct.cmp(&b.correct).then(b.elapsed_secs.cmp(&a.elapsed_secs)))
    }
    /// A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path).map_err(|err| {
            tracing::error!("Failed to read {} due to {err}", path.display());
            HistoryError::ReadError(path.to_path_buf())
        })?;
        serde_json::from_str(&text).map_err(|err| {
            tracing::error!("Failed to parse score history due to: {err}");
            HistoryError::ParseError(path.to_path_buf())
        })
    }
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let text = serde_json::to_string_pretty(self).map_err(|err| {
            tracing::error!("Failed to serialise score history due to: {err}");
            HistoryError::WriteError(path.to_path_buf())
        })?;
        fs::write(path, text).map_err(|err| {
            tracing::error!("Failed to write {} due to {err}", path.display());
            HistoryError::WriteError(path.to_path_buf())
        })
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}  {}/{}  {}秒",
            self.taken_on.format("%Y-%m-%d %H:%M"),
            self.correct,
            self.total,
            self.elapsed_secs,
        )
    }
}

fn normalise(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '，' { ',' } else { c })
        .collect()
}

/// Splits `商 q、あまり r` into `(q, r)`.
fn remainder_pair(answer: &str) -> Option<(String, String)> {
    let answer = normalise(answer);
    let rest = answer.strip_prefix(LABEL_QUOTIENT)?;
    let (quotient, remainder) = rest.split_once(LABEL_LIST_SEPARATOR)?;
    let remainder = remainder.strip_prefix(LABEL_REMAINDER)?;
    Some((quotient.to_string(), remainder.to_string()))
}

/// Whitespace-insensitive comparison; remainder answers also accept `q,r`.
pub fn is_correct(problem: &Problem, input: &str) -> bool {
    let input = normalise(input);
    if input.is_empty() {
        return false;
    }
    if input == normalise(&problem.answer) {
        return true;
    }
    match (remainder_pair(&problem.answer), input.split_once(',')) {
        (Some((quotient, remainder)), Some((q, r))) => quotient == q && remainder == r,
        _ => false,
    }
}
