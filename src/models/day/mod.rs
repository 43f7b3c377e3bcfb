// Day module
// The seven fixed weekdays, each owning an ordered, append-only track list

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::track::Track;

/// Days in the scheduling week.
pub const DAYS_PER_WEEK: usize = 7;

/// Monday-first weekday order; day indices 0..=6 map into this array.
pub const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full display name for a weekday, as shown in the grid header.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One weekday of the grid and its parallel tracks.
///
/// A day starts with exactly one empty track. Tracks are appended on demand
/// during placement and are never removed or reordered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    weekday: Weekday,
    slot_count: usize,
    tracks: Vec<Track>,
}

impl Day {
    /// Create a day with a single empty track of `slot_count` cells.
    pub fn new(weekday: Weekday, slot_count: usize) -> Self {
        Self {
            weekday,
            slot_count,
            tracks: vec![Track::empty(slot_count)],
        }
    }

    /// Build the full Monday..=Sunday week, one empty track per day.
    pub fn week(slot_count: usize) -> Vec<Day> {
        WEEK.iter()
            .map(|&weekday| Day::new(weekday, slot_count))
            .collect()
    }

    /// The fixed weekday identity of this day.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// All tracks in creation order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// A single track, if the index exists.
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks currently allocated for this day.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Append a new empty track and return its index. The only growth point
    /// for a day's track list.
    pub fn push_track(&mut self) -> usize {
        self.tracks.push(Track::empty(self.slot_count));
        self.tracks.len() - 1
    }

    pub(crate) fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cell::Cell;

    #[test]
    fn test_new_day_has_one_empty_track() {
        let day = Day::new(Weekday::Wed, 17);
        assert_eq!(day.track_count(), 1);
        assert_eq!(day.track(0).unwrap().slot_count(), 17);
        assert!(day.track(0).unwrap().cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_week_covers_monday_through_sunday() {
        let days = Day::week(17);
        assert_eq!(days.len(), DAYS_PER_WEEK);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6].weekday(), Weekday::Sun);
        assert!(days.iter().all(|day| day.track_count() == 1));
    }

    #[test]
    fn test_push_track_appends_empty_track() {
        let mut day = Day::new(Weekday::Mon, 17);
        let index = day.push_track();

        assert_eq!(index, 1);
        assert_eq!(day.track_count(), 2);
        assert!(day.track(1).unwrap().cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        let names: Vec<_> = WEEK.iter().map(|&d| weekday_name(d)).collect();
        assert_eq!(names.len(), 7);
    }
}
