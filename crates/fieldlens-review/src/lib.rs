//! High-level review facade over the normalization layer.
//!
//! Mirrors the interactive flow: one analysis result is active at a time,
//! normalized once into a [`ReviewOutcome`] and memoized by content hash
//! plus options until the document bytes or the options change.

pub mod outcome;
pub mod routing;
pub mod session;

pub use outcome::{ReviewOptions, ReviewOutcome, estimate_cost};
pub use routing::route_analyzer;
pub use session::ReviewSession;
