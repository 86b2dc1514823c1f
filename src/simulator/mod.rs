//! FCFS simulation.
//!
//! One deterministic pass over a batch of processes: execution intervals
//! are assigned in arrival order and every downstream statistic is
//! derived from that pass.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.3.1: First-Come, First-Served Scheduling

mod fcfs;

pub use fcfs::simulate;
