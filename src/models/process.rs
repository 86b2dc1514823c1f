//! Process model.
//!
//! A process is one task competing for the CPU. Its static inputs
//! (arrival and burst time) are fixed at construction; the computed
//! outputs live on [`ScheduledProcess`], produced by the simulator.
//!
//! # Time Representation
//! All times are in abstract ticks relative to simulation start (t=0).
//! The consumer defines what one tick means (e.g., 1 ms, 1 quantum).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Carries only the static inputs. Identifiers are caller-supplied and
/// expected to be unique within a batch; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Caller-supplied identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run (ticks, >= 0).
    pub arrival_time: i64,
    /// CPU time the process requires once running (ticks, > 0).
    pub burst_time: i64,
}

impl Process {
    /// Creates a process from its static inputs.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// A process after simulation, with computed outputs filled in.
///
/// Produced fresh by the simulator; the caller's input [`Process`]
/// records are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Caller-supplied identifier.
    pub id: String,
    /// Time at which the process became eligible to run (ticks).
    pub arrival_time: i64,
    /// CPU time the process required (ticks).
    pub burst_time: i64,
    /// Time at which the process finished executing (ticks).
    pub completion_time: i64,
    /// Completion minus arrival: total time in the system (ticks).
    pub turnaround_time: i64,
    /// Turnaround minus burst: time spent ready but not executing (ticks).
    pub waiting_time: i64,
}

impl ScheduledProcess {
    /// Builds the output record for a process that finished at
    /// `completion_time`. Turnaround and waiting times are derived.
    pub fn completed_at(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}
