use crate::types::interval::TimeInterval;

/// The intervals committed by already-assigned subjects along the current
/// search path. Owned by the in-flight search, never shared between
/// branches; commits are undone via checkpoints on backtrack.
#[derive(Debug, Default)]
pub struct Timeline {
    occupied: Vec<TimeInterval>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    pub fn conflicts(&self, interval: &TimeInterval) -> bool {
        self.occupied.iter().any(|busy| busy.overlaps(interval))
    }

    pub fn checkpoint(&self) -> usize {
        self.occupied.len()
    }

    pub fn commit<I>(&mut self, intervals: I)
    where
        I: IntoIterator<Item = TimeInterval>,
    {
        self.occupied.extend(intervals);
    }

    pub fn rollback(&mut self, checkpoint: usize) {
        self.occupied.truncate(checkpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::Timeline;
    use crate::types::interval::TimeInterval;
    use crate::types::weekday::Weekday;

    fn iv(start: u16, end: u16) -> TimeInterval {
        TimeInterval::new(Weekday::Monday, start, end)
    }

    #[test]
    fn empty_timeline_never_conflicts() {
        let timeline = Timeline::new();
        assert!(!timeline.conflicts(&iv(8 * 60, 9 * 60)));
    }

    #[test]
    fn committed_intervals_conflict() {
        let mut timeline = Timeline::new();
        timeline.commit([iv(8 * 60, 9 * 60)]);
        assert!(timeline.conflicts(&iv(8 * 60 + 30, 9 * 60 + 30)));
        assert!(!timeline.conflicts(&iv(9 * 60, 10 * 60)));
    }

    #[test]
    fn rollback_reverts_to_checkpoint() {
        let mut timeline = Timeline::new();
        timeline.commit([iv(8 * 60, 9 * 60)]);
        let checkpoint = timeline.checkpoint();
        timeline.commit([iv(10 * 60, 11 * 60), iv(12 * 60, 13 * 60)]);
        assert!(timeline.conflicts(&iv(10 * 60, 11 * 60)));

        timeline.rollback(checkpoint);
        assert!(!timeline.conflicts(&iv(10 * 60, 11 * 60)));
        assert!(timeline.conflicts(&iv(8 * 60, 9 * 60)));
    }
}
