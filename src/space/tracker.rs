//! Frame accounting for cursors

use super::SpaceProfile;

/// Tracks live frames of a traversal
#[derive(Debug, Clone, Default)]
pub struct SpaceTracker {
    /// Current space used (bytes)
    current: usize,

    /// Maximum seen
    max: usize,

    /// Frame sizes for correct popping
    frame_sizes: Vec<usize>,

    /// Deepest stack seen
    peak_depth: usize,

    /// Frames pushed over the tracker's lifetime
    frames_pushed: usize,
}

impl SpaceTracker {
    /// Create new tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Push stack frame
    pub fn push_frame(&mut self, size: usize) {
        self.current += size;
        self.frame_sizes.push(size);
        self.frames_pushed += 1;
        self.max = self.max.max(self.current);
        self.peak_depth = self.peak_depth.max(self.frame_sizes.len());
    }

    /// Pop stack frame
    pub fn pop_frame(&mut self) {
        if let Some(size) = self.frame_sizes.pop() {
            self.current = self.current.saturating_sub(size);
        }
    }

    /// Live frames
    pub fn depth(&self) -> usize {
        self.frame_sizes.len()
    }

    /// Deepest stack seen
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    /// Maximum bytes held by frames at once
    pub fn max_space_used(&self) -> usize {
        self.max
    }

    /// Profile of usage so far
    pub fn snapshot(&self) -> SpaceProfile {
        SpaceProfile {
            max_space: self.max,
            stack_depth_max: self.peak_depth,
            frames_pushed: self.frames_pushed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_balance() {
        let mut tracker = SpaceTracker::new();
        tracker.push_frame(16);
        tracker.push_frame(16);
        tracker.pop_frame();
        tracker.push_frame(16);
        tracker.pop_frame();
        tracker.pop_frame();
        tracker.pop_frame(); // extra pop is a no-op

        assert_eq!(tracker.depth(), 0);
        assert_eq!(tracker.peak_depth(), 2);
        assert_eq!(tracker.max_space_used(), 32);
        assert_eq!(tracker.snapshot().frames_pushed, 3);
    }
}
