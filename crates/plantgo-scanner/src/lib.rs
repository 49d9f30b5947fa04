//! Scanning state and the simulated plant classifier.
//!
//! Nothing in this crate touches a transport: `ScanSession` is the pure
//! per-connection counter state machine, and `Classifier` is the stand-in
//! for a real inference backend.

pub mod classifier;
pub mod session;

pub use classifier::{Classifier, Identification, DEFAULT_INFERENCE_DELAY, SPECIES};
pub use session::{FrameOutcome, ScanSession, FRAMES_PER_SCAN, PROGRESS_INTERVAL};
