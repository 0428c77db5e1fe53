/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

/// Per-frame metadata for an externally driven render loop.
///
/// The delta varies frame to frame (whatever the driving loop measured), so
/// elapsed time is accumulated rather than derived from the index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Delta time of this frame (seconds).
    pub dt_s: f64,
    /// Elapsed time at the end of this frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn first() -> Self {
        Self {
            index: 0,
            dt_s: 0.0,
            time: Time(0.0),
        }
    }

    pub fn next(self, dt_s: f64) -> Self {
        Self {
            index: self.index + 1,
            dt_s,
            time: Time(self.time.0 + dt_s),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::first()
    }
}
