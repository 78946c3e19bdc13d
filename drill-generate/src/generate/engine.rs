use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod math;

pub type GenerateResult<T> = Result<T, GenerateFailure>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateFailure {
    #[error("difficulty {0} is outside 1..=5")]
    InvalidDifficulty(u8),
    #[error("division by zero while building a problem")]
    DivisionByZero,
}

pub const PROBLEMS_PER_BATCH: usize = 10;
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(level: u8) -> GenerateResult<Self> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&level) {
            return Err(GenerateFailure::InvalidDifficulty(level));
        }
        Ok(Self(level))
    }
    pub fn level(&self) -> u8 {
        self.0
    }
    /// Picks this difficulty's entry from a five-step table.
    pub fn pick<T: Copy>(&self, table: [T; 5]) -> T {
        table[usize::from(self.0 - MIN_DIFFICULTY)]
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GenerateFailure;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}
