// Track module
// One parallel lane of a day: a fixed-length row of cells along the time axis

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::models::cell::{Cell, Session};

/// A parallel lane within a day.
///
/// Holds one cell per time slot. Sessions never overlap within a track; a
/// session head at slot `s` with length `L` is always followed by `L - 1`
/// continuation cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    cells: Vec<Cell>,
}

impl Track {
    /// Create a track with every cell empty. Pure constructor; the only way
    /// tracks come into existence.
    pub fn empty(slot_count: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; slot_count],
        }
    }

    /// Number of slots in the track (the axis length of the owning grid).
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in slot order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A single cell, if the index is within the track.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Whether any cell in the inclusive range `start..=end` is occupied.
    ///
    /// A range reaching past the end of the track counts as a conflict: the
    /// track cannot host it.
    pub fn conflicts_with(&self, start: usize, end: usize) -> bool {
        (start..=end).any(|slot| self.cells.get(slot).map_or(true, |cell| !cell.is_empty()))
    }

    /// Write a session into the track: its head cell at `start_slot` and
    /// continuation markers over the rest of its span.
    ///
    /// # Errors
    /// Returns `GridError::SpanOutOfBounds` when the span does not fit and
    /// `GridError::SlotConflict` when any cell in the span is occupied, in
    /// which case the track is left untouched.
    pub fn place(&mut self, session: Session) -> Result<(), GridError> {
        let start = session.start_slot;
        let end = session.end_slot();

        if end >= self.cells.len() {
            return Err(GridError::SpanOutOfBounds {
                start,
                end,
                slot_count: self.cells.len(),
            });
        }
        if self.cells[start..=end].iter().any(|cell| !cell.is_empty()) {
            return Err(GridError::SlotConflict { start, end });
        }

        for slot in start + 1..=end {
            self.cells[slot] = Cell::Continuation;
        }
        self.cells[start] = Cell::Session(session);

        Ok(())
    }

    /// Iterate over the session heads placed in this track, with their slot
    /// indices, in axis order.
    pub fn sessions(&self) -> impl Iterator<Item = (usize, &Session)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(slot, cell)| cell.session().map(|session| (slot, session)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start: usize, end: usize, label: &str) -> Session {
        Session::new(start, end, label, "#abcdef").unwrap()
    }

    #[test]
    fn test_empty_track_has_only_empty_cells() {
        let track = Track::empty(17);
        assert_eq!(track.slot_count(), 17);
        assert!(track.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_place_writes_head_and_continuations() {
        let mut track = Track::empty(17);
        track.place(session(5, 8, "Keynote")).unwrap();

        assert!(track.cell(5).unwrap().is_session());
        for slot in 6..=8 {
            assert_eq!(track.cell(slot), Some(&Cell::Continuation));
        }
        assert_eq!(track.cell(4), Some(&Cell::Empty));
        assert_eq!(track.cell(9), Some(&Cell::Empty));
    }

    #[test]
    fn test_conflict_detection_over_span() {
        let mut track = Track::empty(17);
        track.place(session(2, 5, "Workshop")).unwrap();

        assert!(track.conflicts_with(2, 4));
        assert!(track.conflicts_with(0, 2));
        assert!(track.conflicts_with(5, 7));
        assert!(track.conflicts_with(3, 3));
        assert!(!track.conflicts_with(0, 1));
        assert!(!track.conflicts_with(6, 16));
    }

    #[test]
    fn test_range_past_track_end_is_a_conflict() {
        let track = Track::empty(17);
        assert!(track.conflicts_with(10, 17));
        assert!(!track.conflicts_with(10, 16));
    }

    #[test]
    fn test_place_onto_occupied_slots_fails_without_mutation() {
        let mut track = Track::empty(17);
        track.place(session(2, 5, "First")).unwrap();
        let before = track.clone();

        let result = track.place(session(4, 6, "Second"));
        assert_eq!(result, Err(GridError::SlotConflict { start: 4, end: 6 }));
        assert_eq!(track, before);
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut track = Track::empty(17);
        let result = track.place(session(15, 17, "Too long"));
        assert_eq!(
            result,
            Err(GridError::SpanOutOfBounds {
                start: 15,
                end: 17,
                slot_count: 17
            })
        );
    }

    #[test]
    fn test_adjacent_sessions_do_not_conflict() {
        let mut track = Track::empty(17);
        track.place(session(0, 3, "Morning")).unwrap();
        track.place(session(4, 7, "Midday")).unwrap();

        let placed: Vec<_> = track.sessions().map(|(slot, s)| (slot, s.label.clone())).collect();
        assert_eq!(
            placed,
            vec![(0, "Morning".to_string()), (4, "Midday".to_string())]
        );
    }

    #[test]
    fn test_sessions_iterates_in_axis_order() {
        let mut track = Track::empty(17);
        track.place(session(10, 12, "Late")).unwrap();
        track.place(session(1, 2, "Early")).unwrap();

        let labels: Vec<_> = track.sessions().map(|(_, s)| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Early", "Late"]);
    }
}
