//! When to report progress during a generation phase.
//!
//! A phase of `total` records reports every `total / 10` records, never
//! before the tenth record, and never past 90% of the total. Phases with
//! fewer than ten records only report their final summary.

use std::fmt;

/// One of the two generation phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Agents,
    Estates,
}

impl Phase {
    /// Singular noun used in error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Phase::Agents => "agent",
            Phase::Estates => "estate",
        }
    }

    /// Plural noun used in progress lines.
    pub fn plural(&self) -> &'static str {
        match self {
            Phase::Agents => "agents",
            Phase::Estates => "estates",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Progress checkpoints for a phase of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    step: u64,
    ceiling: u64,
}

impl ProgressSchedule {
    pub fn new(total: u64) -> Self {
        Self {
            step: total / 10,
            // floor(total * 0.9) without float rounding
            ceiling: (u128::from(total) * 9 / 10) as u64,
        }
    }

    /// Agent phase: `count` is the 1-based number of records sent so far.
    pub fn after_record(&self, count: u64) -> bool {
        self.step != 0 && count >= 10 && count <= self.ceiling && count % self.step == 0
    }

    /// Estate phase: `index` is the 0-based index of the record just sent.
    pub fn at_index(&self, index: u64) -> bool {
        self.step != 0 && index != 0 && index % self.step == 0 && index <= self.ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_checkpoints(total: u64) -> Vec<u64> {
        let schedule = ProgressSchedule::new(total);
        (1..=total).filter(|i| schedule.after_record(*i)).collect()
    }

    fn estate_checkpoints(total: u64) -> Vec<u64> {
        let schedule = ProgressSchedule::new(total);
        (0..total).filter(|i| schedule.at_index(*i)).collect()
    }

    #[test]
    fn test_small_phases_are_silent() {
        for total in 0..10 {
            assert!(agent_checkpoints(total).is_empty(), "agents total={total}");
            assert!(estate_checkpoints(total).is_empty(), "estates total={total}");
        }
    }

    #[test]
    fn test_agent_schedule_hundred() {
        assert_eq!(
            agent_checkpoints(100),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
    }

    #[test]
    fn test_estate_schedule_hundred() {
        assert_eq!(
            estate_checkpoints(100),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
    }

    #[test]
    fn test_ten_records() {
        // The tenth agent is past the 90% ceiling
        assert!(agent_checkpoints(10).is_empty());
        assert_eq!(estate_checkpoints(10), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_uneven_total() {
        // step = 2, ceiling = 22
        assert_eq!(agent_checkpoints(25), vec![10, 12, 14, 16, 18, 20, 22]);
        assert_eq!(
            estate_checkpoints(25),
            vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22]
        );
    }

    #[test]
    fn test_final_record_never_reported() {
        for total in [10u64, 11, 57, 100, 1000, 12345] {
            assert!(!ProgressSchedule::new(total).after_record(total));
            assert!(!ProgressSchedule::new(total).at_index(total - 1));
        }
    }

    #[test]
    fn test_multiples_of_ten_report_at_most_nine_times() {
        for total in (20..=2000).step_by(10) {
            assert!(agent_checkpoints(total).len() <= 9, "agents total={total}");
            assert!(estate_checkpoints(total).len() <= 9, "estates total={total}");
        }
    }

    #[test]
    fn test_huge_total_does_not_overflow() {
        let schedule = ProgressSchedule::new(u64::MAX);
        assert!(schedule.at_index(u64::MAX / 10));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Agents.to_string(), "agent");
        assert_eq!(Phase::Estates.plural(), "estates");
    }
}
