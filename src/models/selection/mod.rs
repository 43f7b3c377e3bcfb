// Selection module
// Transient two-step slot selection feeding the add-session flow

use serde::{Deserialize, Serialize};

/// Lifecycle of the two-step slot selection.
///
/// `Idle` (nothing picked) moves to `OnePicked` on the first slot click and
/// to `ModalOpen` on the second; commit or cancel returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    Idle,
    OnePicked,
    ModalOpen,
}

/// In-progress slot, day, and label choices prior to commit.
///
/// Holds at most two slot indices, stored ascending so the pair is always
/// `(min, max)` regardless of click order. Built incrementally by selection
/// events and consumed atomically by commit or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PendingSelection {
    slots: Vec<usize>,
    day: Option<usize>,
    label: String,
}

impl PendingSelection {
    /// Empty selection: no slots, no day, empty label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a slot pick and report the resulting phase.
    ///
    /// Once two slots are held, further picks are ignored; the pair is only
    /// released by [`PendingSelection::clear`].
    pub fn pick_slot(&mut self, index: usize) -> SelectionPhase {
        if self.slots.len() < 2 {
            self.slots.push(index);
            self.slots.sort_unstable();
        }

        self.phase()
    }

    /// Current phase derived from how many slots are held.
    pub fn phase(&self) -> SelectionPhase {
        match self.slots.len() {
            0 => SelectionPhase::Idle,
            1 => SelectionPhase::OnePicked,
            _ => SelectionPhase::ModalOpen,
        }
    }

    /// The picked slots, ascending.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// The inclusive `(start, end)` range of the selection.
    ///
    /// With a single pick the slot is both start and end; with none there is
    /// no range.
    pub fn slot_range(&self) -> Option<(usize, usize)> {
        match self.slots.as_slice() {
            [] => None,
            [only] => Some((*only, *only)),
            [start, .., end] => Some((*start, *end)),
        }
    }

    /// Record the chosen day index.
    pub fn choose_day(&mut self, index: usize) {
        self.day = Some(index);
    }

    /// The chosen day index, if any.
    pub fn day(&self) -> Option<usize> {
        self.day
    }

    /// Replace the pending label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The pending label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a slot index should be highlighted: the single picked slot, or
    /// any index within the inclusive picked range.
    pub fn is_highlighted(&self, index: usize) -> bool {
        match self.slots.as_slice() {
            [only] => *only == index,
            [start, .., end] => (*start..=*end).contains(&index),
            _ => false,
        }
    }

    /// Reset slots, day, and label in one step.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.day = None;
        self.label.clear();
    }
}
