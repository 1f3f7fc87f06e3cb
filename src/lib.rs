// src/lib.rs
//
// Library entry point: tunable integer remixes constrained to a step grid.

mod callback;
mod error;
mod grid;
mod item;
mod range_remix;

// Re-export key types for Rust consumers
pub use callback::{BoxedCallback, RemixCallback};
pub use error::{RemixError, RemixResult, Violation};
pub use grid::Grid;
pub use item::{LayoutId, RemixItem};
pub use range_remix::{RangeRemix, RangeRemixBuilder};
