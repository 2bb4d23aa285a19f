//! Metrics from a seeding run.

use std::time::Duration;

/// Metrics for one generation phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseMetrics {
    /// Number of records delivered to the target.
    pub records_submitted: u64,
    /// Record counts at which a progress line was emitted.
    pub progress_reports: Vec<u64>,
    /// Time spent in the phase, correlation query included.
    pub duration: Duration,
}

impl PhaseMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records_submitted as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Metrics for a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    pub agents: PhaseMetrics,
    pub estates: PhaseMetrics,
    /// Agent uuids returned by the correlation query.
    pub agents_correlated: u64,
    /// Application errors reported inside query responses.
    pub application_errors: usize,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    pub fn records_submitted(&self) -> u64 {
        self.agents.records_submitted + self.estates.records_submitted
    }

    /// Calculate records per second across both phases.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_submitted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
