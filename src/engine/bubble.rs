//! Bubble sort with early exit

use super::{Action, Algorithm, Highlights, StepEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next step compares `data[j]` and `data[j + 1]`
    Compare,
    /// The comparison was shown; swap if out of order
    Exchange,
    Finished,
}

/// Bubble sort that stops after the first pass without a swap
#[derive(Debug, Clone)]
pub struct BubbleEngine {
    data: Vec<i64>,
    /// Completed outer passes
    pass: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
    done_reported: bool,
}

impl BubbleEngine {
    pub fn new(data: &[i64]) -> Self {
        BubbleEngine {
            data: data.to_vec(),
            pass: 0,
            j: 0,
            swapped: false,
            phase: Phase::Compare,
            done_reported: false,
        }
    }

    /// Finish the inner index and roll over to the next pass when needed.
    /// Returns false when sorting is complete.
    fn next_index(&mut self) -> bool {
        self.j += 1;
        let n = self.data.len();
        if self.j + 1 < n - self.pass {
            return true;
        }
        if !self.swapped {
            return false;
        }
        self.pass += 1;
        self.j = 0;
        self.swapped = false;
        self.pass + 1 < n
    }
}

impl StepEngine for BubbleEngine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn data(&self) -> &[i64] {
        &self.data
    }

    fn advance(&mut self) -> Option<(Highlights, Action)> {
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.data.len() < 2 {
                        self.phase = Phase::Finished;
                        continue;
                    }
                    let j = self.j;
                    self.phase = Phase::Exchange;
                    return Some((
                        Highlights::two(j, j + 1),
                        Action::Compare {
                            left: j,
                            right: j + 1,
                        },
                    ));
                }
                Phase::Exchange => {
                    let j = self.j;
                    let swapped_now = self.data[j] > self.data[j + 1];
                    if swapped_now {
                        self.data.swap(j, j + 1);
                        self.swapped = true;
                    }
                    self.phase = if self.next_index() {
                        Phase::Compare
                    } else {
                        Phase::Finished
                    };
                    if swapped_now {
                        return Some((
                            Highlights::two(j, j + 1),
                            Action::Swap {
                                left: j,
                                right: j + 1,
                            },
                        ));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(engine: &mut BubbleEngine) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some((_, action)) = engine.advance() {
            actions.push(action);
        }
        actions
    }

    #[test]
    fn test_sorted_input_single_pass() {
        let mut engine = BubbleEngine::new(&[1, 2, 3, 4, 5]);
        let actions = drain(&mut engine);

        let compares = actions
            .iter()
            .filter(|a| matches!(a, Action::Compare { .. }))
            .count();
        let swaps = actions
            .iter()
            .filter(|a| matches!(a, Action::Swap { .. }))
            .count();
        assert_eq!(compares, 4);
        assert_eq!(swaps, 0);
        assert_eq!(actions.len(), 5);
        assert_eq!(actions.last(), Some(&Action::Done));
    }

    #[test]
    fn test_swap_follows_compare() {
        let mut engine = BubbleEngine::new(&[2, 1]);

        let (h, a) = engine.advance().unwrap();
        assert_eq!(h.as_slice(), &[0, 1]);
        assert_eq!(a, Action::Compare { left: 0, right: 1 });
        // Compare steps show the array before the swap
        assert_eq!(engine.data(), &[2, 1]);

        let (_, a) = engine.advance().unwrap();
        assert_eq!(a, Action::Swap { left: 0, right: 1 });
        assert_eq!(engine.data(), &[1, 2]);

        assert_eq!(engine.advance().map(|(_, a)| a), Some(Action::Done));
        assert!(engine.is_exhausted());
        assert!(engine.advance().is_none());
    }

    #[test]
    fn test_reverse_input() {
        let mut engine = BubbleEngine::new(&[5, 4, 3, 2, 1]);
        let actions = drain(&mut engine);
        let swaps = actions
            .iter()
            .filter(|a| matches!(a, Action::Swap { .. }))
            .count();
        // Every pair is an inversion
        assert_eq!(swaps, 10);
        assert_eq!(engine.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_early_exit_after_clean_pass() {
        // One swap in the first pass, then a clean second pass
        let mut engine = BubbleEngine::new(&[2, 1, 3, 4]);
        let actions = drain(&mut engine);
        let compares = actions
            .iter()
            .filter(|a| matches!(a, Action::Compare { .. }))
            .count();
        assert_eq!(compares, 3 + 2);
        assert_eq!(engine.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_trivial_inputs() {
        for input in [vec![], vec![9]] {
            let mut engine = BubbleEngine::new(&input);
            assert_eq!(drain(&mut engine), vec![Action::Done]);
            assert_eq!(engine.data(), input.as_slice());
        }
    }
}
