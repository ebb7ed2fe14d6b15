//! Render adapter for the arena.
//!
//! Reads an `Environment` without modifying it and turns it into drawing
//! calls on a `Canvas`. Actual pixel output (windowing, image decoding)
//! belongs to whatever implements `Canvas`; `RecordingCanvas` records the
//! calls instead, for tests and headless runs.

pub mod canvas;
pub mod drawer;
pub mod recording;

pub use canvas::{Canvas, Color, LifeBar};
pub use drawer::{EnvironmentDrawer, Mediator};
pub use recording::{DrawCommand, RecordingCanvas};
