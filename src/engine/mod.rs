//! Resumable sorting engines
//!
//! This module provides the step-generation core:
//! - [`step`]: the [`Step`] snapshot, its [`Highlights`] and [`Action`]
//! - [`errors`]: construction errors
//! - [`bubble`], [`quick`], [`merge`], [`radix`]: one engine per algorithm
//!
//! # Execution Model
//!
//! Every engine owns a private copy of its input and stores its program
//! counter explicitly: a `Phase` enum plus the loop indices a generator would
//! have kept on its stack. [`StepEngine::advance`] performs one unit of work
//! (a comparison, swap, or write) and reports it; [`StepEngine::resume`] wraps
//! that report into a [`Step`] borrowing the live array.
//!
//! Each engine ends with exactly one [`Action::Done`] step. After that,
//! `resume` returns `None` forever.
//!
//! Quick sort and merge sort are naturally recursive. Quick sort keeps an
//! explicit stack of pending ranges instead; merge sort runs bottom-up.

pub mod bubble;
pub mod errors;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod step;

pub use bubble::BubbleEngine;
pub use errors::EngineError;
pub use merge::MergeEngine;
pub use quick::QuickEngine;
pub use radix::RadixEngine;
pub use step::{Action, Highlights, Side, Step};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// The four algorithms raced side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
    Radix,
}

impl Algorithm {
    /// Display order, left to right and top to bottom
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Quick => "Quick",
            Algorithm::Merge => "Merge",
            Algorithm::Radix => "Radix",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sorting algorithm expressed as a resumable producer of steps
pub trait StepEngine {
    fn algorithm(&self) -> Algorithm;

    /// Current contents of the engine's working array
    fn data(&self) -> &[i64];

    /// Perform one unit of work and report the indices touched and what
    /// happened. Returns `None` once the done step has been reported.
    fn advance(&mut self) -> Option<(Highlights, Action)>;

    /// Whether the done step has already been produced
    fn is_exhausted(&self) -> bool;

    /// Resume the engine, yielding the next step or `None` when exhausted
    fn resume(&mut self) -> Option<Step<'_>> {
        let (highlights, action) = self.advance()?;
        Some(Step {
            algorithm: self.algorithm(),
            array: self.data(),
            highlights,
            action,
        })
    }
}

/// Build an engine over a private copy of `data`
///
/// Quick sort draws its pivots from an entropy-seeded generator.
pub fn create_engine(
    algorithm: Algorithm,
    data: &[i64],
) -> Result<Box<dyn StepEngine>, EngineError> {
    build(algorithm, data, StdRng::from_entropy())
}

/// Build an engine whose pivot choices are reproducible for a given seed
pub fn create_seeded_engine(
    algorithm: Algorithm,
    data: &[i64],
    seed: u64,
) -> Result<Box<dyn StepEngine>, EngineError> {
    build(algorithm, data, StdRng::seed_from_u64(seed))
}

fn build(
    algorithm: Algorithm,
    data: &[i64],
    rng: StdRng,
) -> Result<Box<dyn StepEngine>, EngineError> {
    let engine: Box<dyn StepEngine> = match algorithm {
        Algorithm::Bubble => Box::new(BubbleEngine::new(data)),
        Algorithm::Quick => Box::new(QuickEngine::with_rng(data, rng)),
        Algorithm::Merge => Box::new(MergeEngine::new(data)),
        Algorithm::Radix => Box::new(RadixEngine::new(data)?),
    };
    Ok(engine)
}
