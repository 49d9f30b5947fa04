/// A progress update is emitted every this many frames.
pub const PROGRESS_INTERVAL: u32 = 3;

/// Frames required before a scan cycle completes with an identification.
pub const FRAMES_PER_SCAN: u32 = 8;

/// Per-connection scanning state: a single frame counter.
///
/// The counter starts at 0, advances once per valid frame, and returns to 0
/// whenever a scan cycle completes, so the progress/result pattern repeats
/// for as long as frames keep arriving.
#[derive(Debug, Default)]
pub struct ScanSession {
    frames: u32,
}

/// What the session loop must emit after recording one frame.
///
/// Both signals can be set on the same frame; the progress update is
/// computed first and must be written before the identification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutcome {
    /// Progress confidence to report, if this frame lands on the interval.
    pub progress: Option<f64>,
    /// Whether the cycle completed and a classification is due.
    pub scan_complete: bool,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame count within the ongoing cycle.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Record one valid frame and report what to emit.
    ///
    /// The interval check runs before the completion check on the same
    /// counter value, and completion resets the counter for the next cycle.
    pub fn record_frame(&mut self) -> FrameOutcome {
        self.frames += 1;

        let progress = (self.frames % PROGRESS_INTERVAL == 0)
            .then(|| f64::from(self.frames) * 0.1);

        let scan_complete = self.frames >= FRAMES_PER_SCAN;
        if scan_complete {
            self.frames = 0;
        }

        FrameOutcome {
            progress,
            scan_complete,
        }
    }
}
