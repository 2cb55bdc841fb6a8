//! Per-slot element representation
//!
//! This module defines [`ElementState`], the value stored in each slot of the
//! visualized array, and [`ElementUpdate`], the partial update applied to a
//! single slot by [`super::ArrayStore::mutate`].
//!
//! # Highlight Tags
//!
//! - [`ElementTag::Idle`]: resting state
//! - [`ElementTag::Selected`]: the slot takes part in the comparison, swap, or
//!   placement currently being shown
//!
//! A slot is `Selected` only while its operation is on screen. Sort runners
//! clear every tag back to `Idle` before they return.

use serde::Serialize;

/// Visualization tag of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTag {
    #[default]
    Idle,
    Selected,
}

/// One array slot: its current value and highlight tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub value: u32,
    pub state: ElementTag,
}

impl ElementState {
    /// Create an idle element
    pub fn idle(value: u32) -> Self {
        ElementState {
            value,
            state: ElementTag::Idle,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.state == ElementTag::Selected
    }

    /// Apply a partial update in place; `None` fields are left untouched
    pub fn apply(&mut self, update: ElementUpdate) {
        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
    }
}

/// Partial update for one slot (new value and/or new tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementUpdate {
    pub value: Option<u32>,
    pub state: Option<ElementTag>,
}

impl ElementUpdate {
    /// Highlight the slot without touching its value
    pub fn select() -> Self {
        ElementUpdate {
            value: None,
            state: Some(ElementTag::Selected),
        }
    }

    /// Clear the highlight without touching the value
    pub fn release() -> Self {
        ElementUpdate {
            value: None,
            state: Some(ElementTag::Idle),
        }
    }

    /// Write a new value, keeping the current tag
    pub fn value(value: u32) -> Self {
        ElementUpdate {
            value: Some(value),
            state: None,
        }
    }

    /// Write a new value and highlight the slot
    pub fn selected_value(value: u32) -> Self {
        ElementUpdate {
            value: Some(value),
            state: Some(ElementTag::Selected),
        }
    }

    /// Write a new value and clear the highlight
    pub fn idle_value(value: u32) -> Self {
        ElementUpdate {
            value: Some(value),
            state: Some(ElementTag::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_keeps_unset_fields() {
        let mut element = ElementState::idle(120);

        element.apply(ElementUpdate::select());
        assert_eq!(element.value, 120);
        assert!(element.is_selected());

        element.apply(ElementUpdate::value(300));
        assert_eq!(element.value, 300);
        assert!(element.is_selected());

        element.apply(ElementUpdate::idle_value(90));
        assert_eq!(element, ElementState::idle(90));

        element.apply(ElementUpdate::default());
        assert_eq!(element, ElementState::idle(90));
    }
}
