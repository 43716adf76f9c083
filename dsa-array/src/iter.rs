use crate::array::DynamicArray;
use crate::store::RawStore;

/// Owning iterator over elements of [`DynamicArray`].
pub struct IntoIter<T> {
    store: RawStore<T>,
    // slots [start, end) are initialized and not yet yielded.
    start: usize,
    end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // # SAFETY
        //
        // Slot at start is initialized and will never be read again.
        let value = unsafe { self.store.take(self.start) };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.start;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // # SAFETY
        //
        // Slot at end is initialized and will never be read again.
        Some(unsafe { self.store.take(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    #[inline]
    fn drop(&mut self) {
        let range = self.start..self.end;
        self.start = self.end;
        // # SAFETY
        //
        // Remaining slots are initialized.
        unsafe { self.store.drop_range(range) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(mut self) -> IntoIter<T> {
        let (store, len) = self.take_parts();
        IntoIter {
            store,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
