// Error types shared across the grid model and scheduler
// Every fallible operation in the crate reports one of these variants

use thiserror::Error;

/// Errors produced by grid construction, selection input, and placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The time axis must contain at least one slot.
    #[error("time axis must contain at least one slot")]
    EmptyAxis,

    /// The requested slot count would step the axis past midnight.
    #[error("a {slot_count}-slot axis starting at 09:00 would run past midnight")]
    AxisPastMidnight { slot_count: usize },

    /// A slot index outside the fixed time axis.
    #[error("slot index {index} is out of range for a {slot_count}-slot axis")]
    SlotOutOfRange { index: usize, slot_count: usize },

    /// A day index outside Monday..=Sunday (0..=6).
    #[error("day index {index} is out of range (expected 0..=6)")]
    DayOutOfRange { index: usize },

    /// A track index beyond the day's current track list.
    #[error("track index {index} does not exist on this day")]
    TrackOutOfRange { index: usize },

    /// A session range whose end precedes its start.
    #[error("session range {start}..={end} is inverted")]
    InvertedRange { start: usize, end: usize },

    /// A session that does not fit within the track's slot count.
    #[error("session over slots {start}..={end} does not fit a {slot_count}-slot track")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        slot_count: usize,
    },

    /// A placement attempted over already-occupied slots.
    #[error("slots {start}..={end} are already occupied in this track")]
    SlotConflict { start: usize, end: usize },
}
