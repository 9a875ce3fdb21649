//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, frame pacing, keyboard event loop
//! - **[`panes`]**: stateless render functions for the header, the four lane
//!   quadrants and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Race`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Race`]: crate::race::Race
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
