//! DynArray implementation

use std::ops::Index;

/// Growable array with explicit `old * 2 + 1` growth
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    /// Retained elements, oldest first
    items: Vec<T>,

    /// Logical capacity (what the growth policy has reserved)
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with no storage
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty array with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an element; `None` is silently ignored
    pub fn push(&mut self, value: impl Into<Option<T>>) {
        let Some(value) = value.into() else {
            return;
        };
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    fn grow(&mut self) {
        let capacity = self
            .capacity
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .unwrap_or_else(|| panic!("dynarray capacity overflow at {}", self.capacity));
        self.items.reserve_exact(capacity - self.items.len());
        self.capacity = capacity;
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove the element at `index`, shifting later elements left
    ///
    /// O(n). Returns `None` when `index` is out of range.
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// The last element, left in place
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// True if any element satisfies `pred`
    pub fn any(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(pred)
    }

    /// Move every element of `other` onto the end of `self`
    pub fn extend_from(&mut self, other: &mut DynArray<T>) {
        for value in other.items.drain(..) {
            self.push(Some(value));
        }
    }

    /// Apply `release` to every element and empty the array, keeping storage
    pub fn clear_with(&mut self, release: impl FnMut(T)) {
        self.items.drain(..).for_each(release);
    }

    /// Apply `release` to every element, then free the storage
    pub fn release_with(mut self, release: impl FnMut(T)) {
        self.clear_with(release);
    }
}

/// Borrowing iterator over a [`DynArray`]
pub type Iter<'a, T> = std::slice::Iter<'a, T>;

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynArray::new();
        for value in iter {
            array.push(Some(value));
        }
        array
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
