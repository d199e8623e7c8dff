//! Space accounting and profiling
//!
//! Tracks cursor frames to verify the O(h) bound

mod tracker;

pub use tracker::SpaceTracker;

/// Snapshot of frame usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpaceProfile {
    /// Maximum bytes held by frames at once
    pub max_space: usize,

    /// Maximum stack depth reached
    pub stack_depth_max: usize,

    /// Frames pushed in total (nodes visited)
    pub frames_pushed: usize,
}

impl SpaceProfile {
    /// Verify depth bound is satisfied
    pub fn satisfies_bound(&self, bound: usize) -> bool {
        self.stack_depth_max <= bound
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Max space: {} bytes\n  Peak depth: {}\n  Frames pushed: {}",
            self.max_space, self.stack_depth_max, self.frames_pushed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_and_report() {
        let profile = SpaceProfile {
            max_space: 48,
            stack_depth_max: 3,
            frames_pushed: 5,
        };
        assert!(profile.satisfies_bound(3));
        assert!(!profile.satisfies_bound(2));
        assert!(profile.report().contains("Peak depth: 3"));
    }
}
