//! Parallel-column table correlation
//!
//! Two equal-length columns scraped from a rendered table form one logical
//! table: row *i* of the key column describes the same row as cell *i* of
//! the value column. Correlation finds the value cell paired with the first
//! key cell satisfying a predicate.

mod correlate;

pub use correlate::{ParallelTable, lookup};
