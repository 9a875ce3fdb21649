//! Bottom-up merge sort
//!
//! Runs of `width` elements are merged pairwise into a scratch buffer and
//! copied back, with `width` doubling each pass. No recursion is involved, so
//! the whole algorithm state fits in a handful of indices.

use super::{Action, Algorithm, Highlights, Side, StepEngine};

/// The two adjacent runs `[left, mid)` and `[mid, right)` being merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Run {
    left: usize,
    mid: usize,
    right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick the next pair of runs at the current width
    NextBlock,
    /// Two-pointer merge while both runs have elements
    Merge { i: usize, j: usize, k: usize },
    /// One run is empty; copy the rest of the other
    Drain { i: usize, j: usize, k: usize },
    /// Copy the merged run from scratch back into the array
    Write { t: usize },
    Finished,
}

/// Iterative merge sort over a private array
#[derive(Debug, Clone)]
pub struct MergeEngine {
    data: Vec<i64>,
    scratch: Vec<i64>,
    width: usize,
    /// Start of the next block at the current width
    next_left: usize,
    run: Run,
    phase: Phase,
    done_reported: bool,
}

impl MergeEngine {
    pub fn new(data: &[i64]) -> Self {
        MergeEngine {
            data: data.to_vec(),
            scratch: data.to_vec(),
            width: 1,
            next_left: 0,
            run: Run::default(),
            phase: Phase::NextBlock,
            done_reported: false,
        }
    }

    /// Length of the sorted runs currently being merged
    pub fn width(&self) -> usize {
        self.width
    }

    fn run_bounds(&self) -> (usize, usize) {
        (self.run.left, self.run.right)
    }
}

impl StepEngine for MergeEngine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn data(&self) -> &[i64] {
        &self.data
    }

    fn advance(&mut self) -> Option<(Highlights, Action)> {
        let n = self.data.len();
        loop {
            match self.phase {
                Phase::NextBlock => {
                    if self.width >= n {
                        self.phase = Phase::Finished;
                        continue;
                    }
                    if self.next_left >= n {
                        self.width *= 2;
                        self.next_left = 0;
                        continue;
                    }

                    let left = self.next_left;
                    let mid = (left + self.width).min(n);
                    let right = (left + 2 * self.width).min(n);
                    self.next_left += 2 * self.width;
                    if mid < right {
                        self.run = Run { left, mid, right };
                        self.phase = Phase::Merge {
                            i: left,
                            j: mid,
                            k: left,
                        };
                    }
                }
                Phase::Merge { i, j, k } => {
                    let Run { left, mid, right } = self.run;
                    if i >= mid || j >= right {
                        self.phase = Phase::Drain { i, j, k };
                        continue;
                    }

                    // Ties take from the left run, which keeps the sort stable
                    self.phase = if self.data[i] <= self.data[j] {
                        self.scratch[k] = self.data[i];
                        Phase::Merge { i: i + 1, j, k: k + 1 }
                    } else {
                        self.scratch[k] = self.data[j];
                        Phase::Merge { i, j: j + 1, k: k + 1 }
                    };
                    return Some((
                        Highlights::two(i, j),
                        Action::MergeCompare { i, j, left, right },
                    ));
                }
                Phase::Drain { i, j, k } => {
                    let Run { left, mid, right } = self.run;
                    let (side, index) = if i < mid {
                        self.phase = Phase::Drain { i: i + 1, j, k: k + 1 };
                        (Side::Left, i)
                    } else if j < right {
                        self.phase = Phase::Drain { i, j: j + 1, k: k + 1 };
                        (Side::Right, j)
                    } else {
                        self.phase = Phase::Write { t: left };
                        continue;
                    };

                    self.scratch[k] = self.data[index];
                    return Some((
                        Highlights::one(index),
                        Action::Take {
                            side,
                            index,
                            left,
                            right,
                        },
                    ));
                }
                Phase::Write { t } => {
                    let (left, right) = self.run_bounds();
                    if t >= right {
                        self.phase = Phase::NextBlock;
                        continue;
                    }

                    self.data[t] = self.scratch[t];
                    self.phase = Phase::Write { t: t + 1 };
                    return Some((
                        Highlights::one(t),
                        Action::Write {
                            index: t,
                            left,
                            right,
                        },
                    ));
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

#[cfg(test)]
mod tests {
    use super::*;

    /// Advance until the engine moves past `width`, returning the array as it
    /// stood when that width's pass completed.
    fn finish_width(engine: &mut MergeEngine, width: usize) -> Vec<i64> {
        while engine.width() == width && !engine.is_exhausted() {
            engine.advance();
        }
        engine.data().to_vec()
    }

    #[test]
    fn test_width_passes() {
        let mut engine = MergeEngine::new(&[5, 2, 4, 6, 1, 3]);
        assert_eq!(finish_width(&mut engine, 1), vec![2, 5, 4, 6, 1, 3]);
        assert_eq!(finish_width(&mut engine, 2), vec![2, 4, 5, 6, 1, 3]);
        assert_eq!(finish_width(&mut engine, 4), vec![1, 2, 3, 4, 5, 6]);
        assert!(engine.advance().is_none());
    }

    #[test]
    fn test_merge_step_shapes() {
        let mut engine = MergeEngine::new(&[2, 1]);
        let mut actions = Vec::new();
        while let Some((h, a)) = engine.advance() {
            actions.push((h.as_slice().to_vec(), a));
        }

        assert_eq!(
            actions,
            vec![
                (
                    vec![0, 1],
                    Action::MergeCompare {
                        i: 0,
                        j: 1,
                        left: 0,
                        right: 2
                    }
                ),
                (
                    vec![0],
                    Action::Take {
                        side: Side::Left,
                        index: 0,
                        left: 0,
                        right: 2
                    }
                ),
                (
                    vec![0],
                    Action::Write {
                        index: 0,
                        left: 0,
                        right: 2
                    }
                ),
                (
                    vec![1],
                    Action::Write {
                        index: 1,
                        left: 0,
                        right: 2
                    }
                ),
                (vec![], Action::Done),
            ]
        );
        assert_eq!(engine.data(), &[1, 2]);
    }

    #[test]
    fn test_one_write_per_index_per_pass() {
        let input = [9, 8, 7, 6, 5, 4, 3, 2];
        let mut engine = MergeEngine::new(&input);
        let mut writes = 0;
        while let Some((_, action)) = engine.advance() {
            if matches!(action, Action::Write { .. }) {
                writes += 1;
            }
        }
        // Three full passes over eight elements
        assert_eq!(writes, 24);
        assert_eq!(engine.data(), &[2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_trivial_inputs() {
        for input in [vec![], vec![1]] {
            let mut engine = MergeEngine::new(&input);
            assert_eq!(engine.advance(), Some((Highlights::none(), Action::Done)));
            assert_eq!(engine.advance(), None);
        }
    }
}
