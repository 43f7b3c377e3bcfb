// First-fit placement: conflict scan across a day's tracks and the commit
// operation that consumes the pending selection

use log::{debug, info};

use crate::error::GridError;
use crate::models::cell::Session;
use crate::models::day::weekday_name;

use super::WeekScheduler;

/// Where a committed session landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReceipt {
    /// Day index (0 = Monday).
    pub day: usize,
    /// Index of the receiving track within the day.
    pub track_index: usize,
    /// First slot of the placed session.
    pub start_slot: usize,
    /// Slots covered by the placed session.
    pub length: usize,
}

impl WeekScheduler {
    /// Commit the pending selection as a session on the chosen day.
    ///
    /// Scans the day's tracks in creation order and places the session in
    /// the first track whose cells are all empty over the selected inclusive
    /// range. When every existing track conflicts, a fresh empty track is
    /// appended and receives the session, so a commit with a chosen day
    /// always places exactly one session.
    ///
    /// Without a chosen day (or without any picked slot) the commit degrades
    /// to a cancel: nothing is placed and `Ok(None)` is returned. Either way
    /// the pending selection is cleared and the modal closed.
    pub fn commit_session(&mut self) -> Result<Option<PlacementReceipt>, GridError> {
        let receipt = self.place_pending()?;
        self.selection.clear();
        self.modal_open = false;
        Ok(receipt)
    }

    fn place_pending(&mut self) -> Result<Option<PlacementReceipt>, GridError> {
        let (day_index, (start, end)) = match (self.selection.day(), self.selection.slot_range()) {
            (Some(day), Some(range)) => (day, range),
            _ => {
                debug!("commit without a chosen day or slots; treating as cancel");
                return Ok(None);
            }
        };

        let session = Session::new(
            start,
            end,
            self.selection.label(),
            self.colors.next_color(),
        )?;

        let day = self
            .days
            .get_mut(day_index)
            .ok_or(GridError::DayOutOfRange { index: day_index })?;

        let track_index = match day
            .tracks()
            .iter()
            .position(|track| !track.conflicts_with(start, end))
        {
            Some(index) => index,
            None => {
                debug!(
                    "all {} tracks on {} conflict with slots {}..={}; appending a track",
                    day.track_count(),
                    weekday_name(day.weekday()),
                    start,
                    end
                );
                day.push_track()
            }
        };

        day.track_mut(track_index)
            .ok_or(GridError::TrackOutOfRange { index: track_index })?
            .place(session)?;

        info!(
            "placed \"{}\" on {} track {} over slots {}..={}",
            self.selection.label(),
            weekday_name(day.weekday()),
            track_index,
            start,
            end
        );

        Ok(Some(PlacementReceipt {
            day: day_index,
            track_index,
            start_slot: start,
            length: end - start + 1,
        }))
    }
}
