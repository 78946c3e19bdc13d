//! Randomised arithmetic drills for elementary-school exam practice.
//!
//! Problems come from seeded generator families keyed by topic and
//! difficulty; the same seed, topics and difficulty always reproduce the same
//! batch.

pub mod generate;
pub mod quiz;
pub mod similar;

pub type E = Box<dyn ::std::error::Error + Send + Sync + 'static>;
