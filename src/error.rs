//! Error types for FIFO operations.

use snafu::Snafu;

/// Error returned when [`put`](crate::ByteFifo::put) is rejected at full
/// capacity.
///
/// Bytes accepted earlier in the same call stay committed; the number that
/// made it in is recoverable by comparing [`len`](crate::ByteFifo::len)
/// before and after the call. The buffer's overflow flag is raised whenever
/// this error is returned and stays raised until
/// [`clear_overflow`](crate::ByteFifo::clear_overflow).
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(display("fifo is full"))]
pub struct OverflowError;

/// Error returned when [`get`](crate::ByteFifo::get) asks for more bytes
/// than are buffered, or the buffer is empty.
///
/// Nothing is removed when this error is returned.
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(display("requested {requested} bytes, only {available} buffered"))]
pub struct UnderflowError {
    /// Bytes the caller asked for.
    pub requested: usize,
    /// Bytes currently buffered.
    pub available: usize,
}
