//! A fixed-capacity byte FIFO that rejects writes instead of overwriting.
//!
//! Unlike eviction-style ring buffers, [`ByteFifo`] never discards unread
//! data: once the buffer is full, further writes fail and a sticky overflow
//! flag is raised for the caller to inspect and clear. Storage is a fixed
//! inline array, so the buffer is usable in allocation-free environments.
//!
//! # Example
//!
//! ```
//! use byte_fifo::ByteFifo;
//!
//! let fifo: ByteFifo<16> = ByteFifo::new();
//!
//! fifo.put(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
//! assert_eq!(fifo.len(), 4);
//!
//! let mut out = [0u8; 4];
//! fifo.get(&mut out).unwrap();
//! assert_eq!(out, [0xDE, 0xAD, 0xBE, 0xEF]);
//! assert!(fifo.is_empty());
//! ```
//!
//! # Concurrency
//!
//! By default the buffer is single-context: interior mutability keeps the
//! API `&self`, but the type is `!Sync` so the compiler rejects shared use
//! across threads. With the `atomics` feature the control fields carry
//! Acquire/Release ordering and the buffer is safe for exactly one producer
//! calling [`ByteFifo::put`] and one consumer calling [`ByteFifo::get`]
//! concurrently. Anything beyond that still needs an external lock.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod error;
mod fifo;
mod index;
mod traits;


pub use error::{OverflowError, UnderflowError};
pub use fifo::ByteFifo;
pub use traits::{FifoConsumer, FifoProducer, FifoTrait};
