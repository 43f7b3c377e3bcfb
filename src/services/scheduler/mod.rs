//! Weekly scheduler service entry point.
//! Owns the time axis, the seven days with their track lists, and the pending
//! selection; placement itself lives in the `placement` submodule.

use crate::error::GridError;
use crate::models::day::{weekday_name, Day, DAYS_PER_WEEK, WEEK};
use crate::models::selection::{PendingSelection, SelectionPhase};
use crate::services::color::{ColorSource, RandomColors};
use crate::utils::time::TimeAxis;

pub mod placement;

pub use placement::PlacementReceipt;

/// The weekly scheduling grid and its in-progress selection.
///
/// An explicitly constructed model object: independent instances share no
/// state, so each test or scheduling session can own a fresh one. All
/// mutation happens synchronously through the handler methods below; the
/// rendering shell only reads.
pub struct WeekScheduler {
    axis: TimeAxis,
    days: Vec<Day>,
    selection: PendingSelection,
    modal_open: bool,
    colors: Box<dyn ColorSource>,
}

impl WeekScheduler {
    /// A scheduler over the default 09:00-17:00 half-hour axis, with random
    /// session colors.
    pub fn new() -> Self {
        Self::build(TimeAxis::new(), Box::new(RandomColors::from_entropy()))
    }

    /// A scheduler over a custom slot count.
    ///
    /// # Errors
    /// Propagates axis construction errors for counts of zero or axes that
    /// would run past midnight.
    pub fn with_slot_count(slot_count: usize) -> Result<Self, GridError> {
        Ok(Self::build(
            TimeAxis::with_slot_count(slot_count)?,
            Box::new(RandomColors::from_entropy()),
        ))
    }

    /// A scheduler drawing session colors from the given source. Tests use
    /// this with a fixed palette to assert exact color tags.
    pub fn with_colors(colors: impl ColorSource + 'static) -> Self {
        Self::build(TimeAxis::new(), Box::new(colors))
    }

    fn build(axis: TimeAxis, colors: Box<dyn ColorSource>) -> Self {
        let days = Day::week(axis.slot_count());

        Self {
            axis,
            days,
            selection: PendingSelection::new(),
            modal_open: false,
            colors,
        }
    }

    // --- selection inputs from the shell ---

    /// Record a slot click on the time sidebar.
    ///
    /// The first two clicks accumulate into the pending `(min, max)` pair;
    /// the second one opens the modal. Further clicks while the modal is
    /// pending are ignored. Reports the selection phase after the click so
    /// the shell knows when to show its dialog.
    ///
    /// # Errors
    /// Returns `GridError::SlotOutOfRange` for an index off the axis.
    pub fn handle_slot_click(&mut self, index: usize) -> Result<SelectionPhase, GridError> {
        self.axis.check_slot(index)?;

        let phase = self.selection.pick_slot(index);
        if phase == SelectionPhase::ModalOpen {
            self.modal_open = true;
        }

        Ok(phase)
    }

    /// Record the day chosen in the add-session dialog.
    ///
    /// # Errors
    /// Returns `GridError::DayOutOfRange` for an index outside 0..=6.
    pub fn select_day(&mut self, index: usize) -> Result<(), GridError> {
        if index >= DAYS_PER_WEEK {
            return Err(GridError::DayOutOfRange { index });
        }

        self.selection.choose_day(index);
        Ok(())
    }

    /// Record the session label typed in the dialog.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.selection.set_label(label);
    }

    /// Discard the pending selection and close the modal without placing
    /// anything.
    pub fn cancel(&mut self) {
        self.selection.clear();
        self.modal_open = false;
    }

    // --- read access for the rendering shell ---

    /// The fixed time axis.
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// All seven days, Monday first.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// A single day by index.
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    /// The current pending selection.
    pub fn selection(&self) -> &PendingSelection {
        &self.selection
    }

    /// Whether the add-session modal should be showing.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Whether a sidebar slot should be drawn highlighted for the current
    /// selection.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selection.is_highlighted(index)
    }

    /// Header-prefixed display scaffold for the grid.
    ///
    /// Row 0 is `["", "Monday", .., "Sunday"]`; each following row is a slot
    /// label plus seven empty columns. A rendering aid only - the per-day
    /// track lists remain the authoritative schedule.
    pub fn display_matrix(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.axis.slot_count() + 1);

        let mut header = vec![String::new()];
        header.extend(WEEK.iter().map(|&day| weekday_name(day).to_string()));
        rows.push(header);

        for label in self.axis.labels() {
            let mut row = Vec::with_capacity(DAYS_PER_WEEK + 1);
            row.push(label.clone());
            row.resize(DAYS_PER_WEEK + 1, String::new());
            rows.push(row);
        }

        rows
    }
}

impl Default for WeekScheduler {
    fn default() -> Self {
        Self::new()
    }
}
