//! Byte FIFO traits.

use crate::error::{OverflowError, UnderflowError};
use crate::fifo::ByteFifo;

/// Byte FIFO producer.
pub trait FifoProducer {
    /// Try to insert bytes in order. Fails at full capacity; bytes already
    /// inserted in the call stay committed.
    fn try_put(&mut self, data: &[u8]) -> Result<(), OverflowError>;

    /// Bytes insertable before the FIFO is full.
    fn free(&self) -> usize;

    /// True if full.
    fn is_full(&self) -> bool;

    /// Capacity.
    fn capacity(&self) -> usize;

    /// Current length.
    fn len(&self) -> usize;

    /// True if empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Byte FIFO consumer.
pub trait FifoConsumer {
    /// Try to remove exactly `out.len()` bytes, oldest first. Fails without
    /// removing anything if fewer are buffered.
    fn try_get(&mut self, out: &mut [u8]) -> Result<(), UnderflowError>;

    /// Try to remove the oldest byte. Returns `None` if empty.
    #[must_use]
    fn try_pop(&mut self) -> Option<u8>;

    /// Read the oldest byte without removing it.
    #[must_use]
    fn peek(&self) -> Option<u8>;

    /// True if empty.
    fn is_empty(&self) -> bool;

    /// Current length.
    fn len(&self) -> usize;

    /// Capacity.
    fn capacity(&self) -> usize;
}

/// Combined producer and consumer.
pub trait FifoTrait: FifoProducer + FifoConsumer {}

impl<F: FifoProducer + FifoConsumer> FifoTrait for F {}

impl<const N: usize> FifoProducer for ByteFifo<N> {
    #[inline]
    fn try_put(&mut self, data: &[u8]) -> Result<(), OverflowError> {
        self.put(data)
    }

    #[inline]
    fn free(&self) -> usize {
        ByteFifo::free(self)
    }

    #[inline]
    fn is_full(&self) -> bool {
        ByteFifo::is_full(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        ByteFifo::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ByteFifo::is_empty(self)
    }
}

impl<const N: usize> FifoConsumer for ByteFifo<N> {
    #[inline]
    fn try_get(&mut self, out: &mut [u8]) -> Result<(), UnderflowError> {
        self.get(out)
    }

    #[inline]
    fn try_pop(&mut self) -> Option<u8> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        ByteFifo::peek(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ByteFifo::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteFifo::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}
