// Time axis utilities
// Fixed slot-label axis for the weekly grid

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Number of half-hour slots in the default 09:00-17:00 working day.
pub const DEFAULT_SLOT_COUNT: usize = 17;

/// Minutes covered by one slot.
pub const SLOT_MINUTES: usize = 30;

/// Hour of day the first slot starts at.
const DAY_START_HOUR: usize = 9;

/// The fixed time axis of the weekly grid.
///
/// Holds an ordered sequence of `HH:MM` slot labels, strictly increasing in
/// time, fixed at construction. The slot index into this axis is the only
/// time addressing scheme used by the rest of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAxis {
    labels: Vec<String>,
}

impl TimeAxis {
    /// Create the default axis: 17 half-hour slots from 09:00 to 17:00.
    pub fn new() -> Self {
        Self {
            labels: build_labels(DEFAULT_SLOT_COUNT),
        }
    }

    /// Create an axis with a custom slot count, still starting at 09:00 in
    /// 30-minute steps.
    ///
    /// # Errors
    /// Returns `GridError::EmptyAxis` for a zero slot count and
    /// `GridError::AxisPastMidnight` when the last slot would not fit in the
    /// same day.
    pub fn with_slot_count(slot_count: usize) -> Result<Self, GridError> {
        if slot_count == 0 {
            return Err(GridError::EmptyAxis);
        }

        let last_slot_minute = DAY_START_HOUR * 60 + SLOT_MINUTES * (slot_count - 1);
        if last_slot_minute >= 24 * 60 {
            return Err(GridError::AxisPastMidnight { slot_count });
        }

        Ok(Self {
            labels: build_labels(slot_count),
        })
    }

    /// Number of slots on the axis.
    pub fn slot_count(&self) -> usize {
        self.labels.len()
    }

    /// All slot labels in axis order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label for a single slot, if the index is on the axis.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Validate that a slot index addresses this axis.
    pub fn check_slot(&self, index: usize) -> Result<(), GridError> {
        if index < self.labels.len() {
            Ok(())
        } else {
            Err(GridError::SlotOutOfRange {
                index,
                slot_count: self.labels.len(),
            })
        }
    }
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `slot_count` labels from 09:00 in 30-minute steps.
///
/// Callers validate the count first; 09:00 itself is a statically valid time.
fn build_labels(slot_count: usize) -> Vec<String> {
    let start = NaiveTime::from_hms_opt(DAY_START_HOUR as u32, 0, 0).unwrap();

    (0..slot_count)
        .map(|slot| {
            let time = start + Duration::minutes((slot * SLOT_MINUTES) as i64);
            time.format("%H:%M").to_string()
        })
        .collect()
}
