//! Scheduling domain models.
//!
//! Provides the data types for one FCFS simulation run: the input
//! process records, the per-process output metrics, the Gantt timeline,
//! and the aggregate result snapshot.
//!
//! # Terminology
//!
//! | Term | Definition |
//! |------|-----------|
//! | Arrival time | Time a process becomes eligible to run |
//! | Burst time | CPU time required once running, uninterrupted |
//! | Completion time | Time a process finishes executing |
//! | Turnaround time | Completion minus arrival |
//! | Waiting time | Turnaround minus burst |
//! | Makespan | Time the last process completes |

mod process;
mod result;
mod timeline;

pub use process::{Process, ScheduledProcess};
pub use result::SimulationResult;
pub use timeline::TimelineEntry;
