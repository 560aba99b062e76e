//! Tree mirroring
//!
//! The core of the crate: breadth-first traversal of the source tree,
//! destination-side directory recreation, and per-file delegation to the
//! conversion engine.

pub mod config;
pub mod discover;
pub mod report;
pub mod walker;

pub use config::MirrorConfig;
pub use report::MirrorReport;
pub use walker::TreeMirror;
