//! # Introduction
//!
//! SORTTY races four sorting algorithms over the same data and shows every
//! comparison, swap and write as it happens, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Engines (one per algorithm) → Steps → Race → TUI
//! ```
//!
//! 1. [`dataset`]: generates the shared random, sorted or reverse array.
//! 2. [`engine`]: bubble, quick, merge and radix sort as resumable state
//!    machines that yield one [`engine::Step`] per unit of work.
//! 3. [`race`]: resumes every engine a bounded number of times per frame and
//!    keeps the last step, step count and timing of each lane.
//! 4. [`ui`]: four-up ratatui view; not part of the stable library API.
//! 5. [`bench`]: the same algorithms without instrumentation, timed.
//!
//! ## Driving an engine
//!
//! ```
//! use sortty::engine::{create_engine, Algorithm};
//!
//! let mut engine = create_engine(Algorithm::Merge, &[5, 2, 4, 6, 1, 3]).unwrap();
//! while let Some(step) = engine.resume() {
//!     println!("{:?} {}", step.highlights.as_slice(), step.status());
//! }
//! assert_eq!(engine.data(), &[1, 2, 3, 4, 5, 6]);
//! ```

pub mod bench;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod race;
pub mod ui;
