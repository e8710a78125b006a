//! Fixed-capacity actor pools
//!
//! Every spawnable actor lives in a pool whose capacity is set once at
//! construction. A spawn request scans for the first inactive slot (first-fit,
//! not LRU); when every slot is active the request yields `None`, a non-fatal
//! miss the caller treats as "fewer actors on screen", never an error.

/// Implemented by every poolable actor
pub trait Poolable {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Fixed-capacity slot allocator, reused via first-fit allocation.
///
/// Reused slots carry no history from their previous occupant beyond the
/// explicit reset performed by the spawn initializer.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Poolable + Default> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T: Poolable> Pool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Claim the first inactive slot, reset it through `init`, and return it.
    ///
    /// `init` is responsible for fully re-initializing the slot, including
    /// marking it active. Returns `None` when the pool is exhausted, leaving
    /// every active slot untouched.
    pub fn spawn<F: FnOnce(&mut T)>(&mut self, init: F) -> Option<&mut T> {
        let slot = self.slots.iter_mut().find(|s| !s.is_active())?;
        init(slot);
        Some(slot)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Dummy {
        active: bool,
        tag: u32,
    }

    impl Poolable for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    fn spawn_tagged(pool: &mut Pool<Dummy>, tag: u32) -> bool {
        pool.spawn(|d| {
            d.active = true;
            d.tag = tag;
        })
        .is_some()
    }

    #[test]
    fn test_active_count_never_exceeds_capacity() {
        let mut pool: Pool<Dummy> = Pool::new(4);
        for i in 0..10 {
            spawn_tagged(&mut pool, i);
            assert!(pool.active_count() <= pool.capacity());
        }
        assert_eq!(pool.active_count(), 4);
    }

    #[test]
    fn test_spawn_beyond_capacity_is_silent_and_nonmutating() {
        let mut pool: Pool<Dummy> = Pool::new(2);
        assert!(spawn_tagged(&mut pool, 1));
        assert!(spawn_tagged(&mut pool, 2));

        let before: Vec<Dummy> = pool.iter_active().cloned().collect();
        assert!(!spawn_tagged(&mut pool, 99));
        let after: Vec<Dummy> = pool.iter_active().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_first_fit_reuses_freed_slot() {
        let mut pool: Pool<Dummy> = Pool::new(3);
        spawn_tagged(&mut pool, 1);
        spawn_tagged(&mut pool, 2);
        spawn_tagged(&mut pool, 3);

        // Free the first slot and respawn: the new actor lands there
        if let Some(first) = pool.iter_active_mut().next() {
            first.deactivate();
        }
        spawn_tagged(&mut pool, 4);
        let tags: Vec<u32> = pool.iter_active().map(|d| d.tag).collect();
        assert_eq!(tags, vec![4, 2, 3]);
    }

    #[test]
    fn test_iteration_skips_inactive() {
        let mut pool: Pool<Dummy> = Pool::new(5);
        spawn_tagged(&mut pool, 1);
        spawn_tagged(&mut pool, 2);
        assert_eq!(pool.iter_active().count(), 2);

        for d in pool.iter_active_mut() {
            d.deactivate();
        }
        assert_eq!(pool.iter_active().count(), 0);
        assert_eq!(pool.active_count(), 0);
    }
}
