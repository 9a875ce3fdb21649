//! Drives the four engines side by side
//!
//! A [`Race`] owns one [`Lane`] per algorithm, all built over copies of the
//! same dataset. Every frame the UI calls [`Race::tick`], which resumes each
//! unfinished lane up to [`steps_per_frame`] times and records the last step
//! it saw. Engines are never reused: any change to the dataset rebuilds every
//! lane from scratch.

use crate::config::{
    self, RaceConfig, FRAME_RATE, MAX_STEPS_PER_FRAME, MAX_VALUE, SIZE_STEP, SPEED_STEP,
};
use crate::dataset::{self, DataOrder};
use crate::engine::{self, Action, Algorithm, EngineError, Highlights, StepEngine};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Resumptions per engine per frame for a target rate.
///
/// `max(1, min(cap, steps_per_second / frame_rate))`
pub fn steps_per_frame(steps_per_second: u32, frame_rate: u32, cap: usize) -> usize {
    let per_frame = (steps_per_second / frame_rate.max(1)) as usize;
    per_frame.min(cap).max(1)
}

/// One algorithm's slot in the race
pub struct Lane {
    engine: Box<dyn StepEngine>,
    highlights: Highlights,
    last_action: Option<Action>,
    steps: u64,
    started: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Lane {
    fn new(engine: Box<dyn StepEngine>) -> Self {
        Lane {
            engine,
            highlights: Highlights::none(),
            last_action: None,
            steps: 0,
            started: None,
            elapsed: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    /// The engine's array as of the last resumption
    pub fn data(&self) -> &[i64] {
        self.engine.data()
    }

    pub fn highlights(&self) -> Highlights {
        self.highlights
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Steps produced so far, including the final done step
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.engine.is_exhausted()
    }

    /// Wall-clock time from the first start to completion
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn status(&self) -> String {
        if self.is_done() {
            format!("{}: finished", self.algorithm())
        } else {
            match self.last_action {
                Some(action) => format!("{}: {}", self.algorithm(), action),
                None => "Ready".to_string(),
            }
        }
    }

    fn start_clock(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Resume up to `budget` times, stopping early on exhaustion.
    fn advance(&mut self, budget: usize) {
        for _ in 0..budget {
            match self.engine.resume() {
                Some(step) => {
                    self.highlights = step.highlights;
                    self.last_action = Some(step.action);
                    self.steps += 1;
                }
                None => break,
            }
        }

        if self.is_done() {
            self.highlights = Highlights::none();
            if self.elapsed.is_none() {
                self.elapsed = self.started.map(|t| t.elapsed());
                debug!(
                    "{} finished after {} steps in {:?}",
                    self.algorithm(),
                    self.steps,
                    self.elapsed
                );
            }
        }
    }
}

/// Four engines racing over the same dataset
pub struct Race {
    config: RaceConfig,
    dataset: Vec<i64>,
    lanes: Vec<Lane>,
    running: bool,
    rng: StdRng,
}

/// Dataset generator for a race; entropy-seeded when no seed is given
fn dataset_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Race {
    pub fn new(config: RaceConfig) -> Result<Self, EngineError> {
        let mut race = Race {
            config,
            dataset: Vec::new(),
            lanes: Vec::new(),
            running: false,
            rng: dataset_rng(config.seed),
        };
        race.reset()?;
        Ok(race)
    }

    /// Race over a caller-supplied dataset instead of a generated one.
    ///
    /// The configured size follows the dataset; a later reset generates a
    /// fresh dataset of that size.
    pub fn with_dataset(mut config: RaceConfig, dataset: Vec<i64>) -> Result<Self, EngineError> {
        config.size = dataset.len();
        let mut race = Race {
            config,
            dataset,
            lanes: Vec::new(),
            running: false,
            rng: dataset_rng(config.seed),
        };
        race.rebuild_lanes()?;
        Ok(race)
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    pub fn dataset(&self) -> &[i64] {
        &self.dataset
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, algorithm: Algorithm) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.algorithm() == algorithm)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.lanes.iter().all(Lane::is_done)
    }

    pub fn steps_per_frame(&self) -> usize {
        steps_per_frame(self.config.steps_per_second, FRAME_RATE, MAX_STEPS_PER_FRAME)
    }

    /// Generate a fresh dataset and rebuild every lane. Stops the race.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.dataset = dataset::generate(
            self.config.size,
            MAX_VALUE,
            self.config.order,
            &mut self.rng,
        );
        debug!(
            "reset: n={} order={} speed={}",
            self.config.size, self.config.order, self.config.steps_per_second
        );
        self.rebuild_lanes()
    }

    fn rebuild_lanes(&mut self) -> Result<(), EngineError> {
        let mut lanes = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            // Pivot seeds derive from the race seed so a seeded race replays
            let engine = match self.config.seed {
                Some(seed) => engine::create_seeded_engine(algorithm, &self.dataset, seed)?,
                None => engine::create_engine(algorithm, &self.dataset)?,
            };
            lanes.push(Lane::new(engine));
        }
        self.lanes = lanes;
        self.running = false;
        Ok(())
    }

    /// Toggle between running and paused. Starting stamps each lane's clock
    /// the first time.
    pub fn start_pause(&mut self) {
        if self.is_finished() {
            self.running = false;
            return;
        }
        self.running = !self.running;
        if self.running {
            let now = Instant::now();
            for lane in &mut self.lanes {
                lane.start_clock(now);
            }
        }
        debug!("{}", if self.running { "start" } else { "pause" });
    }

    pub fn set_order(&mut self, order: DataOrder) -> Result<(), EngineError> {
        self.config.order = order;
        self.reset()
    }

    /// Grow or shrink the dataset by `delta` elements. Only resets when the
    /// clamped size actually changes.
    pub fn change_size(&mut self, delta: isize) -> Result<(), EngineError> {
        let target = self.config.size.saturating_add_signed(delta);
        let size = config::clamp_size(target);
        if size == self.config.size {
            return Ok(());
        }
        self.config.size = size;
        self.reset()
    }

    pub fn grow(&mut self) -> Result<(), EngineError> {
        self.change_size(SIZE_STEP as isize)
    }

    pub fn shrink(&mut self) -> Result<(), EngineError> {
        self.change_size(-(SIZE_STEP as isize))
    }

    pub fn speed_up(&mut self) {
        self.config.steps_per_second =
            config::clamp_speed(self.config.steps_per_second.saturating_add(SPEED_STEP));
    }

    pub fn speed_down(&mut self) {
        self.config.steps_per_second =
            config::clamp_speed(self.config.steps_per_second.saturating_sub(SPEED_STEP));
    }

    /// Advance every unfinished lane by one frame's budget. Does nothing
    /// while paused; stops the race once all lanes are done.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let budget = self.steps_per_frame();
        for lane in self.lanes.iter_mut().filter(|lane| !lane.is_done()) {
            lane.advance(budget);
        }
        if self.is_finished() {
            self.running = false;
            debug!("all lanes finished");
        }
    }

    /// Resume every lane to completion regardless of pacing
    pub fn run_to_end(&mut self) {
        let now = Instant::now();
        for lane in &mut self.lanes {
            lane.start_clock(now);
            while !lane.is_done() {
                lane.advance(MAX_STEPS_PER_FRAME);
            }
        }
        self.running = false;
    }
}
