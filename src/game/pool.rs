use std::collections::VecDeque;

/// Fixed set of reusable handles. `acquire` hands out an idle handle if one
/// is left; `release` returns it.
#[derive(Debug, Clone)]
pub struct EffectPool<T> {
    idle: VecDeque<T>,
    capacity: usize,
}

impl<T> EffectPool<T> {
    pub fn with_capacity(capacity: usize, make: impl FnMut(usize) -> T) -> Self {
        Self {
            idle: (0..capacity).map(make).collect(),
            capacity,
        }
    }

    pub fn acquire(&mut self) -> Option<T> {
        self.idle.pop_front()
    }

    /// Returns false and drops the handle if the pool is already full.
    pub fn release(&mut self, handle: T) -> bool {
        if self.idle.len() >= self.capacity {
            return false;
        }
        self.idle.push_back(handle);
        true
    }

    pub fn available(&self) -> usize {
        self.idle.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
