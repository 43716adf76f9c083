use crate::error::{Error, Result};
use crate::store::{target_cap, RawStore};
use std::fmt;
use std::ops::{Index, IndexMut};

/// DynamicArray is a growable sequence of elements stored in
/// one contiguous block of slots.
///
/// Logical size is tracked separately from physical capacity.
/// When an element is appended to a full array, the capacity is
/// doubled (an empty block grows to one slot) and existing
/// elements are moved to the new block in order.
/// Capacity never shrinks.
///
/// Indices supplied by caller are signed so that negative ones
/// can be reported distinctly from out-of-range ones.
pub struct DynamicArray<T> {
    store: RawStore<T>,
    // slots [0, len) are initialized.
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array without any slot.
    /// The first append will allocate.
    #[inline]
    pub fn new() -> Self {
        DynamicArray {
            store: RawStore::default(),
            len: 0,
        }
    }

    /// Create an empty array with exactly `cap` slots.
    #[inline]
    pub fn with_capacity(cap: isize) -> Result<Self> {
        if cap < 0 {
            return Err(Error::InvalidCapacity(cap));
        }
        Ok(DynamicArray {
            store: RawStore::with_capacity(cap as usize),
            len: 0,
        })
    }

    /// Returns number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.cap()
    }

    /// Returns number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a value at the end of the array.
    /// If the array is full, it's expanded first.
    #[inline]
    pub fn append(&mut self, value: T) {
        if self.len == self.store.cap() {
            self.reserve_total(self.len + 1);
        }
        self.store.write(self.len, value);
        self.len += 1;
    }

    /// Returns reference to element at given index.
    #[inline]
    pub fn get(&self, idx: isize) -> Result<&T> {
        let idx = self.check_index(idx)?;
        Ok(&self.as_slice()[idx])
    }

    /// Returns mutable reference to element at given index.
    #[inline]
    pub fn get_mut(&mut self, idx: isize) -> Result<&mut T> {
        let idx = self.check_index(idx)?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Remove element at given index and return it.
    /// All subsequent elements are shifted left by one.
    #[inline]
    pub fn remove(&mut self, idx: isize) -> Result<T> {
        let idx = self.check_index(idx)?;
        Ok(self.remove_at(idx))
    }

    /// Insert value at given index, shifting all elements after it
    /// right by one. Index equal to size appends.
    pub fn insert(&mut self, idx: isize, value: T) -> Result<()> {
        if idx < 0 {
            return Err(Error::NegativeIndex(idx));
        }
        let pos = idx as usize;
        if pos > self.len {
            return Err(Error::IndexOutOfRange {
                index: idx,
                size: self.len,
            });
        }
        if self.len == self.store.cap() {
            self.reserve_total(self.len + 1);
        }
        if pos < self.len {
            self.store.open_gap(pos, self.len);
        }
        self.store.write(pos, value);
        self.len += 1;
        Ok(())
    }

    /// Remove the last element and return it.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyArray);
        }
        Ok(self.remove_at(self.len - 1))
    }

    /// Drop all elements. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.len;
        // reset length first so a panicking drop can not cause double free.
        self.len = 0;
        // # SAFETY
        //
        // Slots before original length are initialized.
        unsafe { self.store.drop_range(0..len) }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // # SAFETY
        //
        // Slots before length are always initialized.
        unsafe { self.store.slice(self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // # SAFETY
        //
        // Slots before length are always initialized.
        unsafe { self.store.slice_mut(self.len) }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Make sure the array can hold `total` elements, growing
    /// capacity by the doubling policy.
    pub(crate) fn reserve_total(&mut self, total: usize) {
        let cap = self.store.cap();
        let new_cap = target_cap(cap, total);
        if new_cap == cap {
            return;
        }
        log::debug!(
            "dynamic array grows from {} to {} slots, moving {} elements",
            cap,
            new_cap,
            self.len
        );
        self.store.relocate(self.len, new_cap);
    }

    /// Validate signed index against current size.
    #[inline]
    pub(crate) fn check_index(&self, idx: isize) -> Result<usize> {
        if idx < 0 {
            return Err(Error::NegativeIndex(idx));
        }
        if idx as usize >= self.len {
            return Err(Error::IndexOutOfRange {
                index: idx,
                size: self.len,
            });
        }
        Ok(idx as usize)
    }

    /// Remove element at validated index.
    #[inline]
    pub(crate) fn remove_at(&mut self, idx: usize) -> T {
        debug_assert!(idx < self.len);
        // # SAFETY
        //
        // Index is less than length, so the slot is initialized.
        let value = unsafe { self.store.take(idx) };
        // removing last element needs no shift.
        if idx + 1 < self.len {
            self.store.close_gap(idx, self.len);
        }
        self.len -= 1;
        value
    }

    /// Hand over the store and length, leaving self empty.
    #[inline]
    pub(crate) fn take_parts(&mut self) -> (RawStore<T>, usize) {
        let len = std::mem::take(&mut self.len);
        (std::mem::take(&mut self.store), len)
    }
}

impl<T> Drop for DynamicArray<T> {
    #[inline]
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for DynamicArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// keep capacity when cloning.
impl<T: Clone> Clone for DynamicArray<T> {
    #[inline]
    fn clone(&self) -> Self {
        let mut res = DynamicArray {
            store: RawStore::with_capacity(self.capacity()),
            len: 0,
        };
        for v in self.iter() {
            res.append(v.clone());
        }
        res
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Prints elements separated by single space.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        &self.as_slice()[idx]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.as_mut_slice()[idx]
    }
}
