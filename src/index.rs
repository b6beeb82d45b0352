//! Control-field cells for atomic or non-atomic access.
//!
//! `head` and `tail` are each written by exactly one side (producer and
//! consumer respectively), so [`Index`] only needs plain load/store. The
//! shared occupancy [`Counter`] is the synchronization point between the
//! sides: with the `atomics` feature its increments and decrements carry
//! Release ordering and its loads Acquire, which is what makes a slot write
//! on one side visible before the other side reuses the slot.

#[cfg(feature = "atomics")]
mod atomic {
    use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Single-writer index using Acquire/Release ordering.
    #[repr(transparent)]
    pub struct Index(AtomicUsize);

    impl Index {
        #[inline]
        pub const fn new(val: usize) -> Self {
            Self(AtomicUsize::new(val))
        }

        /// Load with Acquire ordering.
        #[inline]
        pub fn load(&self) -> usize {
            self.0.load(Ordering::Acquire)
        }

        /// Load with Relaxed ordering (for reading own index).
        #[inline]
        pub fn load_relaxed(&self) -> usize {
            self.0.load(Ordering::Relaxed)
        }

        /// Store with Release ordering.
        #[inline]
        pub fn store(&self, val: usize) {
            self.0.store(val, Ordering::Release);
        }
    }

    /// Occupancy counter, incremented by the producer and decremented by
    /// the consumer.
    #[repr(transparent)]
    pub struct Counter(AtomicUsize);

    impl Counter {
        #[inline]
        pub const fn new(val: usize) -> Self {
            Self(AtomicUsize::new(val))
        }

        /// Load with Acquire ordering.
        #[inline]
        pub fn load(&self) -> usize {
            self.0.load(Ordering::Acquire)
        }

        /// Increment with Release ordering.
        #[inline]
        pub fn add(&self, n: usize) {
            self.0.fetch_add(n, Ordering::Release);
        }

        /// Decrement with Release ordering.
        #[inline]
        pub fn sub(&self, n: usize) {
            self.0.fetch_sub(n, Ordering::Release);
        }

        /// Store with Release ordering.
        #[inline]
        pub fn store(&self, val: usize) {
            self.0.store(val, Ordering::Release);
        }
    }

    /// Sticky boolean flag.
    #[repr(transparent)]
    pub struct Flag(AtomicBool);

    impl Flag {
        #[inline]
        pub const fn new(val: bool) -> Self {
            Self(AtomicBool::new(val))
        }

        #[inline]
        pub fn get(&self) -> bool {
            self.0.load(Ordering::Acquire)
        }

        #[inline]
        pub fn set(&self, val: bool) {
            self.0.store(val, Ordering::Release);
        }
    }
}

#[cfg(not(feature = "atomics"))]
mod non_atomic {
    use core::cell::Cell;

    /// Non-atomic index for single-context use.
    #[repr(transparent)]
    pub struct Index(Cell<usize>);

    impl Index {
        #[inline]
        pub const fn new(val: usize) -> Self {
            Self(Cell::new(val))
        }

        #[inline]
        pub fn load(&self) -> usize {
            self.0.get()
        }

        #[inline]
        pub fn load_relaxed(&self) -> usize {
            self.0.get()
        }

        #[inline]
        pub fn store(&self, val: usize) {
            self.0.set(val);
        }
    }

    /// Non-atomic occupancy counter for single-context use.
    #[repr(transparent)]
    pub struct Counter(Cell<usize>);

    impl Counter {
        #[inline]
        pub const fn new(val: usize) -> Self {
            Self(Cell::new(val))
        }

        #[inline]
        pub fn load(&self) -> usize {
            self.0.get()
        }

        #[inline]
        pub fn add(&self, n: usize) {
            self.0.set(self.0.get() + n);
        }

        #[inline]
        pub fn sub(&self, n: usize) {
            self.0.set(self.0.get() - n);
        }

        #[inline]
        pub fn store(&self, val: usize) {
            self.0.set(val);
        }
    }

    /// Non-atomic sticky flag.
    #[repr(transparent)]
    pub struct Flag(Cell<bool>);

    impl Flag {
        #[inline]
        pub const fn new(val: bool) -> Self {
            Self(Cell::new(val))
        }

        #[inline]
        pub fn get(&self) -> bool {
            self.0.get()
        }

        #[inline]
        pub fn set(&self, val: bool) {
            self.0.set(val);
        }
    }
}

#[cfg(feature = "atomics")]
pub use atomic::{Counter, Flag, Index};

#[cfg(not(feature = "atomics"))]
pub use non_atomic::{Counter, Flag, Index};
