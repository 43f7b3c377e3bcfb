// Test fixtures - reusable test data
// Provides consistent schedulers and commit helpers across test files

use session_grid::services::color::FixedColors;
use session_grid::{PlacementReceipt, WeekScheduler};

/// Palette used by every fixture scheduler, so color tags are exact.
pub const PALETTE: [&str; 3] = ["#aa0000", "#00bb00", "#0000cc"];

/// A scheduler with a deterministic color source.
pub fn scheduler() -> WeekScheduler {
    let _ = env_logger::builder().is_test(true).try_init();
    WeekScheduler::with_colors(FixedColors::new(PALETTE))
}

/// Drive the full selection flow and commit: click both endpoints, choose the
/// day, type the label, commit.
pub fn commit_session(
    scheduler: &mut WeekScheduler,
    day: usize,
    start: usize,
    end: usize,
    label: &str,
) -> PlacementReceipt {
    scheduler.handle_slot_click(start).expect("start click");
    if end != start {
        scheduler.handle_slot_click(end).expect("end click");
    }
    scheduler.select_day(day).expect("day choice");
    scheduler.set_label(label);
    scheduler
        .commit_session()
        .expect("commit")
        .expect("placement")
}
