// Cell module
// Tagged cell states for a scheduling track

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A scheduled session occupying a contiguous run of slots within one track.
///
/// The session is recorded once at its head slot; the remaining slots of its
/// span are marked as [`Cell::Continuation`] in the owning track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Slot index where the session begins.
    pub start_slot: usize,
    /// Number of consecutive slots the session covers (at least 1).
    pub length: usize,
    /// User-entered label; may be empty.
    pub label: String,
    /// Display color as `#rrggbb` hex, assigned at placement time.
    pub color_tag: String,
}

impl Session {
    /// Create a session spanning the inclusive slot range `start_slot..=end_slot`.
    ///
    /// # Errors
    /// Returns `GridError::InvertedRange` when `end_slot < start_slot`.
    pub fn new(
        start_slot: usize,
        end_slot: usize,
        label: impl Into<String>,
        color_tag: impl Into<String>,
    ) -> Result<Self, GridError> {
        if end_slot < start_slot {
            return Err(GridError::InvertedRange {
                start: start_slot,
                end: end_slot,
            });
        }

        Ok(Self {
            start_slot,
            length: end_slot - start_slot + 1,
            label: label.into(),
            color_tag: color_tag.into(),
        })
    }

    /// Last slot index covered by the session (inclusive).
    pub fn end_slot(&self) -> usize {
        self.start_slot + self.length - 1
    }

    /// Whether a slot index falls within the session's span.
    pub fn covers(&self, slot: usize) -> bool {
        (self.start_slot..=self.end_slot()).contains(&slot)
    }
}

/// One cell of a track along the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No session occupies this slot.
    #[default]
    Empty,
    /// Occupied as a non-first slot of a session starting earlier in the track.
    Continuation,
    /// First slot of a session; carries the full session record.
    Session(Session),
}

impl Cell {
    /// Whether the cell holds a structured session head rather than a bare
    /// marker. Rendering uses this to decide between a labeled block and a
    /// plain cell.
    pub fn is_session(&self) -> bool {
        matches!(self, Cell::Session(_))
    }

    /// Whether the cell is free.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The session record, when this cell is a session head.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Cell::Session(session) => Some(session),
            _ => None,
        }
    }
}
