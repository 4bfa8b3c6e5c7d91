//! Task value type.

/// Time unit used throughout the model (instance files use plain integers).
pub type Time = i64;

/// A unit of work with a fixed start and finish time.
///
/// Tasks are identified by their 0-based index into
/// [`ProblemModel::tasks`](super::ProblemModel::tasks) and are immutable
/// once loaded. A well-formed task has `finish >= start`; instances are
/// checked at the boundary by [`validate_model`](super::validate_model).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Task {
    /// Start time.
    pub start: Time,
    /// Finish time.
    pub finish: Time,
}

impl Task {
    /// Creates a task from its start and finish times.
    pub fn new(start: Time, finish: Time) -> Self {
        Self { start, finish }
    }

    /// Time spanned by this task alone.
    pub fn duration(&self) -> Time {
        self.finish - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        assert_eq!(Task::new(10, 25).duration(), 15);
        assert_eq!(Task::new(5, 5).duration(), 0);
    }
}
