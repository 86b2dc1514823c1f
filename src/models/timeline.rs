//! Timeline (Gantt) model.
//!
//! A timeline entry records one contiguous interval during which a
//! single process had exclusive use of the CPU. Entries are produced in
//! execution order; a hole between consecutive entries is an idle gap
//! (idle time is never recorded as an explicit entry).

use serde::{Deserialize, Serialize};

/// One contiguous execution interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Identifier of the process that held the CPU.
    pub process_id: String,
    /// Time execution began (ticks).
    pub start: i64,
    /// Time execution finished (ticks). `end - start` equals the
    /// process's burst time.
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Interval length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}
