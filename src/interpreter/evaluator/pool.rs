use tracing::debug;

use crate::{error::EvalError, interpreter::value::core::Number};

/// Number of slots a fresh pool starts with.
pub const SCRATCH_POOL_SIZE: usize = 128;

/// Bump storage for the intermediate results of one statement.
///
/// Every evaluated node claims the next slot. Slots are never released one by
/// one: [`ScratchPool::reset`] invalidates all of them at once at the start of
/// the next statement. When full, the pool doubles and fills the new slots
/// with zeros.
///
/// # Example
/// ```
/// use arbcalc::interpreter::{evaluator::pool::ScratchPool, value::core::Number};
///
/// let mut pool = ScratchPool::new();
/// let slot = pool.alloc(Number::from_i64(7)).unwrap();
///
/// assert_eq!(pool.get(slot).unwrap(), &Number::from_i64(7));
/// pool.reset();
/// assert!(pool.get(slot).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ScratchPool {
    slots:  Vec<Number>,
    cursor: usize,
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchPool {
    /// Creates a pool of [`SCRATCH_POOL_SIZE`] zeroed slots.
    #[must_use]
    pub fn new() -> Self {
        Self { slots:  vec![Number::zero(); SCRATCH_POOL_SIZE],
               cursor: 0, }
    }

    /// Invalidates every slot.
    pub const fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Stores `value` in the next free slot and returns the slot index.
    ///
    /// # Errors
    /// [`EvalError::PoolExhausted`] if the pool is full and cannot double.
    pub fn alloc(&mut self, value: Number) -> Result<usize, EvalError> {
        if self.cursor == self.slots.len() {
            self.grow()?;
        }
        let slot = self.cursor;
        self.slots[slot] = value;
        self.cursor += 1;
        Ok(slot)
    }

    /// Reads a slot claimed since the last reset.
    ///
    /// # Errors
    /// [`EvalError::DanglingIndex`] for a slot not claimed since the last
    /// reset.
    pub fn get(&self, slot: usize) -> Result<&Number, EvalError> {
        if slot >= self.cursor {
            return Err(EvalError::DanglingIndex { index: slot });
        }
        Ok(&self.slots[slot])
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots claimed since the last reset.
    #[must_use]
    pub const fn in_use(&self) -> usize {
        self.cursor
    }

    fn grow(&mut self) -> Result<(), EvalError> {
        let current = self.slots.len();
        let requested = current.max(1).checked_mul(2)
                                      .ok_or(EvalError::PoolExhausted { requested: usize::MAX })?;
        self.slots
            .try_reserve_exact(requested - current)
            .map_err(|_| EvalError::PoolExhausted { requested })?;
        self.slots.resize_with(requested, Number::zero);
        debug!(from = current, to = requested, "scratch pool grown");
        Ok(())
    }
}
