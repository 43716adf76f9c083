use std::mem::MaybeUninit;
use std::ops::Range;

/// Capacity assigned when growing an empty store.
/// Doubling zero would keep the store empty forever.
pub const MIN_NON_ZERO_CAP: usize = 1;
/// Multiplier applied to capacity on each growth.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the capacity following given one under the doubling policy.
#[inline]
pub fn grown_cap(cap: usize) -> usize {
    if cap == 0 {
        return MIN_NON_ZERO_CAP;
    }
    match cap.checked_mul(GROWTH_FACTOR) {
        Some(new_cap) => new_cap,
        None => panic!("capacity overflow"),
    }
}

/// Returns the smallest capacity reachable from `cap` by repeated
/// growth which can hold at least `min_cap` elements.
#[inline]
pub fn target_cap(cap: usize, min_cap: usize) -> usize {
    let mut new_cap = cap;
    while new_cap < min_cap {
        new_cap = grown_cap(new_cap);
    }
    new_cap
}

/// RawStore is a fixed-capacity block of typed slots.
///
/// It never tracks which slots are initialized, and never drops
/// elements by itself. The owner keeps the initialized prefix and
/// must release it via [`RawStore::drop_range`] before the store
/// goes away.
pub struct RawStore<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawStore<T> {
    /// Create a new store with exactly `cap` uninitialized slots.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        let slots = std::iter::repeat_with(MaybeUninit::uninit)
            .take(cap)
            .collect();
        RawStore { slots }
    }

    /// Returns number of slots.
    #[inline]
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Write value into given slot.
    /// Previous content of the slot is overwritten without drop.
    #[inline]
    pub fn write(&mut self, idx: usize, value: T) {
        self.slots[idx].write(value);
    }

    /// Move value out of given slot, leaving it uninitialized.
    ///
    /// # Safety
    ///
    /// The slot must be initialized.
    #[inline]
    pub unsafe fn take(&mut self, idx: usize) -> T {
        std::mem::replace(&mut self.slots[idx], MaybeUninit::uninit()).assume_init()
    }

    /// Cast first `len` slots to immutable slice.
    ///
    /// # Safety
    ///
    /// First `len` slots must be initialized.
    #[inline]
    pub unsafe fn slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.cap());
        std::slice::from_raw_parts(self.slots.as_ptr() as *const T, len)
    }

    /// Cast first `len` slots to mutable slice.
    ///
    /// # Safety
    ///
    /// First `len` slots must be initialized.
    #[inline]
    pub unsafe fn slice_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.cap());
        std::slice::from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, len)
    }

    /// Drop values in given range of slots in place.
    ///
    /// # Safety
    ///
    /// All slots in range must be initialized, and are treated
    /// as uninitialized afterwards.
    #[inline]
    pub unsafe fn drop_range(&mut self, range: Range<usize>) {
        for slot in &mut self.slots[range] {
            slot.assume_init_drop();
        }
    }

    /// Close the vacant slot at `idx` by shifting slots `[idx + 1, len)`
    /// left by one. The vacant slot ends up at `len - 1`.
    #[inline]
    pub fn close_gap(&mut self, idx: usize, len: usize) {
        debug_assert!(idx < len && len <= self.cap());
        self.slots[idx..len].rotate_left(1);
    }

    /// Open a vacant slot at `idx` by shifting slots `[idx, len)` right
    /// by one. Slot `len` must be vacant and within capacity.
    #[inline]
    pub fn open_gap(&mut self, idx: usize, len: usize) {
        debug_assert!(idx <= len && len < self.cap());
        self.slots[idx..=len].rotate_right(1);
    }

    /// Replace the store with a new one of `new_cap` slots, moving the
    /// first `len` slots over in order. The old store is released.
    #[inline]
    pub fn relocate(&mut self, len: usize, new_cap: usize) {
        debug_assert!(len <= self.cap() && len <= new_cap);
        let mut new_store = RawStore::with_capacity(new_cap);
        for (dst, src) in new_store.slots.iter_mut().zip(&mut self.slots[..len]) {
            std::mem::swap(dst, src);
        }
        *self = new_store;
    }
}

impl<T> Default for RawStore<T> {
    #[inline]
    fn default() -> Self {
        RawStore::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_cap() {
        assert_eq!(1, grown_cap(0));
        assert_eq!(2, grown_cap(1));
        assert_eq!(6, grown_cap(3));
        assert_eq!(0, target_cap(0, 0));
        assert_eq!(4, target_cap(0, 3));
        assert_eq!(12, target_cap(3, 7));
        assert_eq!(8, target_cap(8, 5));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_grown_cap_overflow() {
        grown_cap(usize::MAX / 2 + 1);
    }

    #[test]
    fn test_raw_store() {
        let mut store = RawStore::with_capacity(4);
        assert_eq!(4, store.cap());
        for i in 0..3 {
            store.write(i, i as i64 * 10);
        }
        unsafe {
            assert_eq!(&[0, 10, 20], store.slice(3));
            store.slice_mut(3)[1] = 11;
            assert_eq!(11, store.take(1));
        }
        store.close_gap(1, 3);
        unsafe {
            assert_eq!(&[0, 20], store.slice(2));
        }
        store.open_gap(0, 2);
        store.write(0, -1);
        unsafe {
            assert_eq!(&[-1, 0, 20], store.slice(3));
        }
        store.relocate(3, 8);
        assert_eq!(8, store.cap());
        unsafe {
            assert_eq!(&[-1, 0, 20], store.slice(3));
            store.drop_range(0..3);
        }
    }

    #[test]
    fn test_raw_store_owned_values() {
        let mut store = RawStore::with_capacity(2);
        store.write(0, String::from("a"));
        store.write(1, String::from("b"));
        store.relocate(2, 3);
        unsafe {
            assert_eq!(vec!["a", "b"], store.slice(2));
            store.drop_range(0..2);
        }
    }
}
