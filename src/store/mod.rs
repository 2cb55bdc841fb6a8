//! Array state store for the visualizer
//!
//! This module provides the single source of truth for a visualization
//! session:
//! - [`element`]: per-slot [`ElementState`] and the partial [`ElementUpdate`]
//! - [`ArrayStore`]: the ordered slots, generation, and point mutation
//!
//! # Lifecycle
//!
//! A fresh snapshot is generated on every "new array" request and on every
//! size change; the previous one is replaced wholesale. While a sort runs,
//! the length stays fixed and only individual slots change.
//!
//! # Value Range
//!
//! Generated values are drawn uniformly from [`VALUE_RANGE`] (60 inclusive,
//! 1000 exclusive) so that every bar has a visible height.

pub mod element;

use crate::sorting::errors::{Result, SortError};
use rand::Rng;
use std::ops::Range;

pub use element::{ElementState, ElementTag, ElementUpdate};

/// Range generated values are drawn from
pub const VALUE_RANGE: Range<u32> = 60..1000;

/// Smallest array the generator accepts
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest array the generator accepts
pub const MAX_ARRAY_SIZE: usize = 50;

/// Ordered sequence of slots, as handed to observers and renderers
pub type ArraySnapshot = Vec<ElementState>;

/// Check a requested size against the generator bounds
pub fn validate_array_size(size: usize) -> Result<()> {
    if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SortError::InvalidArraySize {
            size,
            min: MIN_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        })
    }
}

/// Generate a fresh idle snapshot of `size` random values
pub fn generate_array<R: Rng>(size: usize, rng: &mut R) -> Result<ArraySnapshot> {
    validate_array_size(size)?;
    Ok((0..size)
        .map(|_| ElementState::idle(rng.random_range(VALUE_RANGE)))
        .collect())
}

/// Owns the mutable slots of one visualization session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStore {
    elements: Vec<ElementState>,
}

impl ArrayStore {
    pub fn new() -> Self {
        ArrayStore {
            elements: Vec::new(),
        }
    }

    /// Seed a store from explicit values (any length, all idle)
    pub fn from_values(values: &[u32]) -> Self {
        ArrayStore {
            elements: values.iter().copied().map(ElementState::idle).collect(),
        }
    }

    /// Replace the snapshot with `size` random values.
    ///
    /// On an out-of-range size the current snapshot is left untouched.
    pub fn generate<R: Rng>(&mut self, size: usize, rng: &mut R) -> Result<()> {
        self.elements = generate_array(size, rng)?;
        Ok(())
    }

    /// Apply a partial update to exactly one slot and return the new state.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; runners only address slots they own.
    pub fn mutate(&mut self, index: usize, update: ElementUpdate) -> ElementState {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .unwrap_or_else(|| panic!("Slot index {} out of range for length {}", index, len));
        slot.apply(update);
        *slot
    }

    /// Plain values in slot order
    pub fn to_values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn elements(&self) -> &[ElementState] {
        &self.elements
    }

    pub fn snapshot(&self) -> ArraySnapshot {
        self.elements.clone()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Indices of all currently highlighted slots
    pub fn selected_indices(&self) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].value <= w[1].value)
    }
}
