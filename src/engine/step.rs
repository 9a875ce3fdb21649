//! Observable output of a step engine
//!
//! - [`Step`]: borrowed view of the engine's array plus what just happened
//! - [`Highlights`]: the (at most three) indices involved in the step
//! - [`Action`]: structured description of the step, rendered as status text
//!
//! A [`Step`] borrows the engine's live array. It is only valid until the next
//! call to [`StepEngine::resume`]; consumers that need to keep anything copy
//! out the [`Highlights`] and [`Action`], which are both `Copy`.
//!
//! [`StepEngine::resume`]: super::StepEngine::resume

use super::Algorithm;
use std::fmt;

/// Maximum number of indices a single step highlights
pub const MAX_HIGHLIGHTS: usize = 3;

/// Fixed-capacity set of highlighted indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights {
    indices: [usize; MAX_HIGHLIGHTS],
    len: usize,
}

impl Highlights {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(a: usize) -> Self {
        Highlights {
            indices: [a, 0, 0],
            len: 1,
        }
    }

    pub fn two(a: usize, b: usize) -> Self {
        Highlights {
            indices: [a, b, 0],
            len: 2,
        }
    }

    pub fn three(a: usize, b: usize, c: usize) -> Self {
        Highlights {
            indices: [a, b, c],
            len: 3,
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

/// Which run a merge takes an element from while draining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// What a single step did
///
/// Merge actions carry the half-open run `[left, right)` being merged so the
/// status text can show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bubble: adjacent comparison
    Compare { left: usize, right: usize },
    /// Bubble: adjacent swap
    Swap { left: usize, right: usize },

    /// Quick: element `j` compared against the pivot parked at `pivot`
    PivotCompare { j: usize, pivot: usize },
    /// Quick: element moved below the insertion cursor
    PivotSwap { i: usize, j: usize },
    /// Quick: pivot moved to its final index
    PlacePivot { index: usize },

    /// Merge: heads of the two runs compared
    MergeCompare {
        i: usize,
        j: usize,
        left: usize,
        right: usize,
    },
    /// Merge: element taken while draining one run
    Take {
        side: Side,
        index: usize,
        left: usize,
        right: usize,
    },
    /// Merge: scratch value copied back into the array
    Write {
        index: usize,
        left: usize,
        right: usize,
    },

    /// Radix: element counted into its digit bucket
    Count { digit: u8, exp: u64 },
    /// Radix: bucket counts turned into end offsets
    PrefixSums { exp: u64 },
    /// Radix: element placed into the output buffer
    Place { digit: u8, exp: u64 },
    /// Radix: output buffer copied back into the array
    WriteBack { exp: u64 },

    Done,
}

impl Action {
    pub fn is_done(&self) -> bool {
        matches!(self, Action::Done)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Action::Compare { left, right } => write!(f, "compare {} vs {}", left, right),
            Action::Swap { left, right } => write!(f, "swap {} <-> {}", left, right),
            Action::PivotCompare { j, pivot } => write!(f, "j={} compare pivot@{}", j, pivot),
            Action::PivotSwap { i, j } => write!(f, "swap i={}, j={}", i, j),
            Action::PlacePivot { index } => write!(f, "place pivot -> {}", index),
            Action::MergeCompare { i, j, left, right } => {
                write!(f, "compare i={}, j={} [{}:{}]", i, j, left, right)
            }
            Action::Take {
                side: Side::Left,
                index,
                left,
                right,
            } => write!(f, "take left i={} [{}:{}]", index, left, right),
            Action::Take {
                side: Side::Right,
                index,
                left,
                right,
            } => write!(f, "take right j={} [{}:{}]", index, left, right),
            Action::Write { index, left, right } => {
                write!(f, "write t={} [{}:{}]", index, left, right)
            }
            Action::Count { digit, exp } => write!(f, "count digit={} (exp={})", digit, exp),
            Action::PrefixSums { exp } => write!(f, "prefix sums (exp={})", exp),
            Action::Place { digit, exp } => write!(f, "place digit={} (exp={})", digit, exp),
            Action::WriteBack { exp } => write!(f, "write back (exp={})", exp),
            Action::Done => write!(f, "done"),
        }
    }
}

/// One observable unit of algorithmic progress
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub algorithm: Algorithm,
    /// Live view of the engine's array
    pub array: &'a [i64],
    pub highlights: Highlights,
    pub action: Action,
}

impl Step<'_> {
    /// Human-readable status line, e.g. `Bubble: swap 3 <-> 4`
    pub fn status(&self) -> String {
        format!("{}: {}", self.algorithm, self.action)
    }

    pub fn is_done(&self) -> bool {
        self.action.is_done()
    }
}
