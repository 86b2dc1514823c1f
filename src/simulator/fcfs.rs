//! First-Come-First-Served scheduling pass.
//!
//! # Algorithm
//!
//! 1. Sort the batch by arrival time (stable: equal arrivals keep their
//!    input order — the FCFS tie-break contract).
//! 2. Walk the sorted sequence advancing a simulated clock. A clock
//!    behind the next arrival jumps forward, leaving an idle hole in
//!    the timeline.
//! 3. Derive completion, turnaround, and waiting times per process and
//!    accumulate the totals.
//! 4. After the pass, compute the averages, the makespan, and CPU
//!    utilization.
//!
//! # Complexity
//! O(n log n) in the sort; the pass itself is linear.

use crate::models::{Process, ScheduledProcess, SimulationResult, TimelineEntry};
use crate::validation::{validate_input, ValidationError};

/// Simulates FCFS execution of a process batch.
///
/// Validation runs first and is all-or-nothing: an invalid batch
/// returns every detected problem and no partial result. The input
/// slice is never mutated; outputs are fresh records in execution order.
///
/// # Example
///
/// ```
/// use fcfs_sim::models::Process;
/// use fcfs_sim::simulator::simulate;
///
/// let batch = vec![
///     Process::new("P1", 0, 4),
///     Process::new("P2", 1, 3),
/// ];
/// let result = simulate(&batch).unwrap();
/// assert_eq!(result.total_time, 7);
/// assert_eq!(result.processes[0].completion_time, 4);
/// assert_eq!(result.processes[1].waiting_time, 3);
/// ```
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(processes)?;

    // Stable sort: equal arrival times keep their input order.
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut clock: i64 = 0;
    let mut total_waiting: i64 = 0;
    let mut total_turnaround: i64 = 0;
    let mut total_burst: i64 = 0;
    let mut scheduled = Vec::with_capacity(order.len());
    let mut timeline = Vec::with_capacity(order.len());

    for process in order {
        // CPU idles until the next arrival; the hole stays in the
        // timeline implicitly.
        if clock < process.arrival_time {
            clock = process.arrival_time;
        }

        let completion = clock + process.burst_time;
        let run = ScheduledProcess::completed_at(process, completion);

        total_waiting += run.waiting_time;
        total_turnaround += run.turnaround_time;
        total_burst += process.burst_time;

        timeline.push(TimelineEntry::new(&process.id, clock, completion));
        scheduled.push(run);
        clock = completion;
    }

    // The final clock equals the max timeline end: entries are produced
    // in non-decreasing end order.
    let n = scheduled.len() as f64;
    Ok(SimulationResult {
        avg_waiting_time: total_waiting as f64 / n,
        avg_turnaround_time: total_turnaround as f64 / n,
        cpu_utilization: 100.0 * total_burst as f64 / clock as f64,
        total_time: clock,
        processes: scheduled,
        timeline,
    })
}
