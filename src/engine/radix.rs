//! Least-significant-digit radix sort, base 10
//!
//! Each digit place runs four passes: count digits, turn counts into bucket
//! end offsets, place elements into an output buffer walking backwards (which
//! keeps equal digits in their previous order), and copy the buffer back.

use super::{Action, Algorithm, EngineError, Highlights, StepEngine};

const RADIX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Count { i: usize },
    PrefixSums,
    /// `remaining` elements are still to be placed, walking down from the end
    Place { remaining: usize },
    WriteBack { i: usize },
    Finished,
}

/// LSD radix sort over non-negative integers
#[derive(Debug, Clone)]
pub struct RadixEngine {
    data: Vec<i64>,
    output: Vec<i64>,
    counts: [usize; RADIX as usize],
    max: u64,
    exp: u64,
    phase: Phase,
    done_reported: bool,
}

impl RadixEngine {
    /// Fails if any value is negative.
    pub fn new(data: &[i64]) -> Result<Self, EngineError> {
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(EngineError::InvalidInput { index, value });
        }

        let max = data.iter().copied().max().unwrap_or(0) as u64;
        let mut engine = RadixEngine {
            data: data.to_vec(),
            output: vec![0; data.len()],
            counts: [0; RADIX as usize],
            max,
            exp: 1,
            phase: Phase::Finished,
            done_reported: false,
        };
        engine.phase = engine.start_digit();
        Ok(engine)
    }

    /// Current digit place (1, 10, 100, ...)
    pub fn exp(&self) -> u64 {
        self.exp
    }

    fn digit(&self, value: i64) -> u8 {
        ((value as u64 / self.exp) % RADIX) as u8
    }

    /// Enter the counting pass for `exp`, or finish once no value has a digit
    /// at this place. Fewer than two elements are already sorted.
    fn start_digit(&mut self) -> Phase {
        if self.data.len() < 2 || self.max / self.exp == 0 {
            return Phase::Finished;
        }
        self.counts = [0; RADIX as usize];
        Phase::Count { i: 0 }
    }
}

impl StepEngine for RadixEngine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Radix
    }

    fn data(&self) -> &[i64] {
        &self.data
    }

    fn advance(&mut self) -> Option<(Highlights, Action)> {
        let n = self.data.len();
        let exp = self.exp;
        match self.phase {
            Phase::Count { i } => {
                let digit = self.digit(self.data[i]);
                self.counts[digit as usize] += 1;
                self.phase = if i + 1 < n {
                    Phase::Count { i: i + 1 }
                } else {
                    Phase::PrefixSums
                };
                Some((Highlights::one(i), Action::Count { digit, exp }))
            }
            Phase::PrefixSums => {
                for d in 1..self.counts.len() {
                    self.counts[d] += self.counts[d - 1];
                }
                self.phase = Phase::Place { remaining: n };
                Some((Highlights::none(), Action::PrefixSums { exp }))
            }
            Phase::Place { remaining } => {
                let i = remaining - 1;
                let value = self.data[i];
                let digit = self.digit(value);
                let bucket = &mut self.counts[digit as usize];
                self.output[*bucket - 1] = value;
                *bucket -= 1;
                self.phase = if i > 0 {
                    Phase::Place { remaining: i }
                } else {
                    Phase::WriteBack { i: 0 }
                };
                // The source index is highlighted, not the destination
                Some((Highlights::one(i), Action::Place { digit, exp }))
            }
            Phase::WriteBack { i } => {
                self.data[i] = self.output[i];
                self.phase = if i + 1 < n {
                    Phase::WriteBack { i: i + 1 }
                } else {
                    match self.exp.checked_mul(RADIX) {
                        Some(next) => {
                            self.exp = next;
                            self.start_digit()
                        }
                        None => Phase::Finished,
                    }
                };
                Some((Highlights::one(i), Action::WriteBack { exp }))
            }
            Phase::Finished => {
                if self.done_reported {
                    return None;
                }
                self.done_reported = true;
                Some((Highlights::none(), Action::Done))
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.done_reported
    }
}
