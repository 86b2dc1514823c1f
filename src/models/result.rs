//! Simulation result model.
//!
//! A result is a pure snapshot of one FCFS run: the executed processes
//! with their computed metrics, the Gantt timeline, and the aggregate
//! statistics. It holds no references back into the caller's input and
//! stays valid for as long as the caller retains it.

use serde::{Deserialize, Serialize};

use super::{ScheduledProcess, TimelineEntry};

/// Aggregate output of one simulation run.
///
/// `processes` and `timeline` are both in execution order (sorted by
/// arrival time, input order breaking ties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Executed processes with computed outputs, in execution order.
    pub processes: Vec<ScheduledProcess>,
    /// Arithmetic mean of waiting times.
    pub avg_waiting_time: f64,
    /// Arithmetic mean of turnaround times.
    pub avg_turnaround_time: f64,
    /// `100 × total burst / total_time`, in percent.
    pub cpu_utilization: f64,
    /// Execution intervals in execution order; holes are idle gaps.
    pub timeline: Vec<TimelineEntry>,
    /// Makespan: time at which the last process completed (ticks).
    pub total_time: i64,
}

impl SimulationResult {
    /// Number of executed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Computed metrics for a process, by id.
    ///
    /// With duplicate ids (a caller responsibility), returns the first
    /// executed occurrence.
    pub fn metrics_for(&self, process_id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// Timeline entry for a process, by id.
    pub fn entry_for_process(&self, process_id: &str) -> Option<&TimelineEntry> {
        self.timeline.iter().find(|e| e.process_id == process_id)
    }

    /// Total CPU time spent executing (sum of burst times, ticks).
    pub fn total_burst_time(&self) -> i64 {
        self.timeline.iter().map(|e| e.duration()).sum()
    }

    /// Total time the CPU sat idle between arrivals (ticks).
    ///
    /// Zero exactly when the timeline has no holes.
    pub fn idle_time(&self) -> i64 {
        self.total_time - self.total_burst_time()
    }
}
