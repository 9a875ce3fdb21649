//! TUI pane rendering modules
//!
//! - [`header`]: control hints and the race summary line
//! - [`lane`]: one quadrant per algorithm with status, timer and bars
//! - [`status`]: status bar with race state and keybindings
//! - `bars`: bar chart layout shared by the lane panes
//!
//! Every pane is a stateless `render_*` function over borrowed race state.

mod bars;

pub mod header;
pub mod lane;
pub mod status;

pub use header::render_header_pane;
pub use lane::render_lane_pane;
pub use status::{render_status_bar, RaceState};
