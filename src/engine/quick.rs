//! Quick sort with Lomuto partitioning and an explicit range stack
//!
//! Recursion is replaced by a stack of pending half-open ranges. One range is
//! partitioned to completion before the next is popped, so the steps of a
//! single partition are always contiguous.

use super::{Action, Algorithm, Highlights, StepEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cursor state of the partition in progress (inclusive `lo..=hi`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    lo: usize,
    hi: usize,
    /// Insertion cursor: everything in `lo..i` is `<= pivot`
    i: usize,
    j: usize,
    pivot: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pop the next pending range
    Pop,
    /// Next step compares `data[j]` against the pivot
    Compare(Partition),
    /// The comparison was shown; move `data[j]` below the cursor if needed
    Exchange(Partition),
    Finished,
}

/// Randomised in-place quick sort
///
/// The pivot source is generic so tests can replay a run from a seed.
#[derive(Debug, Clone)]
pub struct QuickEngine<R: Rng = StdRng> {
    data: Vec<i64>,
    /// Pending half-open ranges `[start, end)`
    pending: Vec<(usize, usize)>,
    phase: Phase,
    rng: R,
    done_reported: bool,
}

impl QuickEngine<StdRng> {
    pub fn seeded(data: &[i64], seed: u64) -> Self {
        Self::with_rng(data, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuickEngine<R> {
    pub fn with_rng(data: &[i64], rng: R) -> Self {
        QuickEngine {
            data: data.to_vec(),
            pending: vec![(0, data.len())],
            phase: Phase::Pop,
            rng,
            done_reported: false,
        }
    }

    /// Number of ranges still waiting to be partitioned
    pub fn pending_ranges(&self) -> usize {
        self.pending.len()
    }

    /// Choose a random pivot for `[start, end)` and park it at the end
    fn begin_partition(&mut self, start: usize, end: usize) -> Partition {
        let lo = start;
        let hi = end - 1;
        let pivot_index = self.rng.gen_range(lo..=hi);
        self.data.swap(pivot_index, hi);
        Partition {
            lo,
            hi,
            i: lo,
            j: lo,
            pivot: self.data[hi],
        }
    }

    /// Queue both sides of a placed pivot, larger side first so the smaller
    /// one is popped next.
    fn push_sides(&mut self, lo: usize, pivot_index: usize, hi: usize) {
        let left = (lo, pivot_index);
        let right = (pivot_index + 1, hi + 1);
        if left.1 - left.0 > right.1 - right.0 {
            self.pending.push(left);
            self.pending.push(right);
        } else {
            self.pending.push(right);
            self.pending.push(left);
        }
    }
}

impl<R: Rng> StepEngine for QuickEngine<R> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn data(&self) -> &[i64] {
        &self.data
    }

    fn advance(&mut self) -> Option<(Highlights, Action)> {
        loop {
            match self.phase {
                Phase::Pop => match self.pending.pop() {
                    Some((start, end)) if end > start + 1 => {
                        self.phase = Phase::Compare(self.begin_partition(start, end));
                    }
                    Some(_) => {}
                    None => self.phase = Phase::Finished,
                },
                Phase::Compare(part) => {
                    if part.j < part.hi {
                        self.phase = Phase::Exchange(part);
                        return Some((
                            Highlights::three(part.j, part.hi, part.i),
                            Action::PivotCompare {
                                j: part.j,
                                pivot: part.hi,
                            },
                        ));
                    }

                    self.data.swap(part.i, part.hi);
                    self.push_sides(part.lo, part.i, part.hi);
                    self.phase = Phase::Pop;
                    return Some((
                        Highlights::two(part.i, part.hi),
                        Action::PlacePivot { index: part.i },
                    ));
                }
                Phase::Exchange(mut part) => {
                    let Partition { i, j, hi, .. } = part;
                    part.j += 1;
                    if self.data[j] > part.pivot {
                        self.phase = Phase::Compare(part);
                        continue;
                    }

                    part.i += 1;
                    self.phase = Phase::Compare(part);
                    if i != j {
                        self.data.swap(i, j);
                        return Some((Highlights::three(i, j, hi), Action::PivotSwap { i, j }));
                    }
                }
                Phase::Finished => {
                    if self.done_reported {
                        return None;
                    }
                    self.done_reported = true;
                    return Some((Highlights::none(), Action::Done));
                }
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.done_reported
    }
}
