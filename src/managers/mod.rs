// TabIntent state managers
// Managers handle stateful operations: the note collection and the per-page
// overlay state machine.

pub mod note_manager;
pub mod overlay_manager;
