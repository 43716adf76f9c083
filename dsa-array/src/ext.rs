use crate::array::DynamicArray;
use crate::error::Result;

/// Direction of sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl<T> DynamicArray<T> {
    /// Append all values of given iterator in order.
    ///
    /// Capacity is reserved once from the lower size hint of the
    /// iterator, and the array keeps growing by doubling if the
    /// hint is too small.
    pub fn bulk_append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_total(self.len().saturating_add(lower));
        for v in iter {
            self.append(v);
        }
    }

    /// Remove elements at all given indices and return them, ordered
    /// by their original positions.
    ///
    /// Every index refers to the array before any removal. All indices
    /// are validated before the array is touched, so on error nothing
    /// is removed. Duplicated indices remove the element only once.
    pub fn bulk_remove(&mut self, indices: &[isize]) -> Result<Vec<T>> {
        let mut targets = Vec::with_capacity(indices.len());
        for &idx in indices {
            targets.push(self.check_index(idx)?);
        }
        targets.sort_unstable();
        targets.dedup();
        log::trace!(
            "bulk remove {} of {} elements from array",
            targets.len(),
            self.len()
        );
        // remove from the back so that pending indices are not shifted.
        let mut removed: Vec<T> = targets
            .iter()
            .rev()
            .map(|&idx| self.remove_at(idx))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Search value and return index of its first occurrence.
    #[inline]
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns whether the array contains given value.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(value).is_some()
    }

    /// Sort elements in given order. The sort is stable.
    #[inline]
    pub fn sort(&mut self, order: SortOrder)
    where
        T: Ord,
    {
        match order {
            SortOrder::Ascending => self.as_mut_slice().sort(),
            SortOrder::Descending => self.as_mut_slice().sort_by(|a, b| b.cmp(a)),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.bulk_append(iter)
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.bulk_append(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = DynamicArray::new();
        res.bulk_append(iter);
        res
    }
}
