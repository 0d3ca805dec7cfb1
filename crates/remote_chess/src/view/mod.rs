//! View models driven by the session controller.
//!
//! Neither type talks to the network or decides anything about turns; the
//! controller pushes snapshots, visual moves and log lines into them and the
//! terminal layer draws what they hold.

mod board_view;
mod geometry;
mod move_log;

pub use board_view::{BoardView, Cell, Shade, glyph};
pub use geometry::BoardGeometry;
pub use move_log::{LogEntry, LogKind, MoveLog};
