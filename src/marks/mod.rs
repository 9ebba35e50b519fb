//! Fast-clearable mark array
//!
//! Tracks which hash values have been seen during one search trial. Each
//! slot stores the generation in which it was last marked; clearing bumps
//! the generation, so a clear is O(1) except when the counter wraps and the
//! storage has to be zeroed for real.

use crate::config::Options;

/// Array of marks cleared by advancing a generation stamp.
#[derive(Debug)]
pub struct MarkArray {
    /// Generation in which each slot was last marked; 0 means never
    storage: Box<[u32]>,
    /// Current generation, never 0
    generation: u32,
    debug: bool,
}

impl MarkArray {
    /// Array of `size` unmarked slots, numbered `0..size`.
    pub fn new(size: usize) -> Self {
        Self::with_config(size, &Options::default())
    }

    /// Like [`new`](Self::new), emitting diagnostics if `options.debug`.
    pub fn with_config(size: usize, options: &Options) -> Self {
        if options.debug {
            tracing::debug!(
                size,
                total_bytes = size * std::mem::size_of::<u32>(),
                "mark array allocated"
            );
        }
        Self {
            storage: vec![0; size].into_boxed_slice(),
            generation: 1,
            debug: options.debug,
        }
    }

    /// Mark `index`, returning whether it was already marked since the last
    /// [`clear`](Self::clear).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set_bit(&mut self, index: usize) -> bool {
        let slot = &mut self.storage[index];
        if *slot == self.generation {
            true
        } else {
            *slot = self.generation;
            false
        }
    }

    /// Whether `index` has been marked since the last clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.storage[index] == self.generation
    }

    /// Unmark every slot.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stale stamps would match again after the wrap.
            self.generation = 1;
            self.storage.fill(0);
            if self.debug {
                tracing::debug!(size = self.storage.len(), "mark array re-initialized");
            }
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current generation stamp; starts at 1 and advances on every clear.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Drop for MarkArray {
    fn drop(&mut self) {
        if self.debug {
            tracing::debug!(
                size = self.storage.len(),
                iteration = self.generation,
                "dumping mark array information"
            );
        }
    }
}
