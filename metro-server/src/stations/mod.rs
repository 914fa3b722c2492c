//! Station directory.
//!
//! Provides the fixed set of known stations, the line serving each one,
//! and suggestions for mistyped names.

mod directory;

pub use directory::{Line, MAX_SUGGESTIONS, Station, StationDirectory};
