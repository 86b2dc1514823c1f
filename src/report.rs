//! Plain-text rendering of simulation results.
//!
//! Pure string production: a fixed-width per-process table with summary
//! lines, and a one-line Gantt view of the timeline. No I/O happens
//! here; callers decide where the text goes.
//!
//! Column layout and 2-decimal rounding of the averages are
//! presentation choices, not part of the simulation contract.

use crate::models::SimulationResult;

/// Renders the per-process table and summary lines.
///
/// # Example
///
/// ```
/// use fcfs_sim::models::Process;
/// use fcfs_sim::{report, simulator};
///
/// let result = simulator::simulate(&[Process::new("1", 0, 5)]).unwrap();
/// let text = report::render(&result);
/// assert!(text.contains("Average Waiting Time: 0.00"));
/// ```
pub fn render(result: &SimulationResult) -> String {
    let mut out = String::new();

    out.push_str(
        "Process ID | Arrival Time | Burst Time | Completion Time | Turnaround Time | Waiting Time\n",
    );
    out.push_str(
        "-----------|--------------|------------|-----------------|-----------------|-------------\n",
    );

    for p in &result.processes {
        out.push_str(&format!(
            "{:<10} | {:<12} | {:<10} | {:<15} | {:<15} | {}\n",
            p.id, p.arrival_time, p.burst_time, p.completion_time, p.turnaround_time, p.waiting_time
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Average Waiting Time: {:.2}\n",
        result.avg_waiting_time
    ));
    out.push_str(&format!(
        "Average Turnaround Time: {:.2}\n",
        result.avg_turnaround_time
    ));
    out.push_str(&format!(
        "CPU Utilization: {:.2}%\n",
        result.cpu_utilization
    ));
    out.push_str(&format!("Total Time: {}\n", result.total_time));

    out
}

/// Renders the timeline as one line, marking idle holes.
///
/// Example output: `| P1 0..4 | idle 4..6 | P2 6..9 |`
pub fn render_timeline(result: &SimulationResult) -> String {
    let mut out = String::from("|");
    let mut prev_end = 0;

    for entry in &result.timeline {
        if entry.start > prev_end {
            out.push_str(&format!(" idle {}..{} |", prev_end, entry.start));
        }
        out.push_str(&format!(
            " {} {}..{} |",
            entry.process_id, entry.start, entry.end
        ));
        prev_end = entry.end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::simulator::simulate;

    fn sample() -> SimulationResult {
        simulate(&[
            Process::new("1", 0, 4),
            Process::new("2", 1, 3),
            Process::new("3", 2, 1),
            Process::new("4", 3, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_rows() {
        let text = render(&sample());
        assert!(text.starts_with("Process ID | Arrival Time"));
        assert!(text.contains("1          | 0            | 4          | 4               | 4               | 0\n"));
        assert!(text.contains("4          | 3            | 2          | 10              | 7               | 5\n"));
    }

    #[test]
    fn test_render_summary() {
        let text = render(&sample());
        assert!(text.contains("Average Waiting Time: 3.25\n"));
        assert!(text.contains("Average Turnaround Time: 5.75\n"));
        assert!(text.contains("CPU Utilization: 100.00%\n"));
        assert!(text.contains("Total Time: 10\n"));
    }

    #[test]
    fn test_render_timeline_contiguous() {
        let text = render_timeline(&sample());
        assert_eq!(text, "| 1 0..4 | 2 4..7 | 3 7..8 | 4 8..10 |");
    }

    #[test]
    fn test_render_timeline_with_idle() {
        let result = simulate(&[Process::new("P1", 0, 2), Process::new("P2", 5, 3)]).unwrap();
        let text = render_timeline(&result);
        assert_eq!(text, "| P1 0..2 | idle 2..5 | P2 5..8 |");
    }

    #[test]
    fn test_render_timeline_leading_idle() {
        let result = simulate(&[Process::new("P1", 3, 2)]).unwrap();
        assert_eq!(render_timeline(&result), "| idle 0..3 | P1 3..5 |");
    }
}
