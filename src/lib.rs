// Session Grid Library
// Weekly scheduling grid core: first-fit track placement over a fixed time axis

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::GridError;
pub use models::cell::{Cell, Session};
pub use models::selection::{PendingSelection, SelectionPhase};
pub use services::scheduler::{PlacementReceipt, WeekScheduler};
