//! Overlay Manager for TabIntent.
//!
//! Per-page state machine for the transient on-page overlay. The manager is
//! a pure renderer: it applies [`ExtensionMessage`] render commands and never
//! touches storage — the background coordinator owns the decision of what to
//! show. At most one overlay is visible at a time, and every overlay expires
//! on its own after a fixed timeout.

use crate::types::message::ExtensionMessage;
use crate::types::note::TabNote;

/// What the visible overlay is rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView {
    /// The saved intention note for this page.
    Note(TabNote),
    /// The call-to-action to create a note.
    Reminder,
}

/// Explicit overlay state. Replaces the ambient "overlay shown" flag of
/// earlier iterations so the re-entrancy rule is visible in the type.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayState {
    Hidden,
    Visible {
        view: OverlayView,
        shown_at_ms: i64,
        deadline_ms: i64,
    },
}

/// Trait defining the overlay state machine interface.
pub trait OverlayManagerTrait {
    /// Applies a render command. Show commands while an overlay is visible
    /// are no-ops; `OpenPopup` is not a render command and is ignored.
    fn apply(&mut self, message: &ExtensionMessage, now_ms: i64);
    /// User dismiss action.
    fn dismiss(&mut self);
    /// The reminder's "open editor" action. Dismisses the overlay and yields
    /// the `OPEN_POPUP` message for the coordinator; `None` in any other state.
    fn request_open_editor(&mut self) -> Option<ExtensionMessage>;
    /// Clock callback: auto-dismisses once the deadline has passed.
    fn tick(&mut self, now_ms: i64);
    fn state(&self) -> &OverlayState;
    fn is_visible(&self) -> bool;
}

/// Overlay manager for one page context.
pub struct OverlayManager {
    state: OverlayState,
    auto_dismiss_ms: i64,
}

impl OverlayManager {
    /// Creates a hidden overlay manager with the given auto-dismiss timeout.
    pub fn new(auto_dismiss_ms: u64) -> Self {
        Self {
            state: OverlayState::Hidden,
            auto_dismiss_ms: auto_dismiss_ms as i64,
        }
    }

    fn show(&mut self, view: OverlayView, now_ms: i64) {
        if matches!(self.state, OverlayState::Visible { .. }) {
            return;
        }
        self.state = OverlayState::Visible {
            view,
            shown_at_ms: now_ms,
            deadline_ms: now_ms + self.auto_dismiss_ms,
        };
    }
}

impl OverlayManagerTrait for OverlayManager {
    fn apply(&mut self, message: &ExtensionMessage, now_ms: i64) {
        match message {
            ExtensionMessage::ShowNoteOverlay { note } => {
                self.show(OverlayView::Note(note.clone()), now_ms);
            }
            ExtensionMessage::ShowIntentPrompt => {
                self.show(OverlayView::Reminder, now_ms);
            }
            ExtensionMessage::OpenPopup => {}
        }
    }

    fn dismiss(&mut self) {
        self.state = OverlayState::Hidden;
    }

    fn request_open_editor(&mut self) -> Option<ExtensionMessage> {
        match self.state {
            OverlayState::Visible {
                view: OverlayView::Reminder,
                ..
            } => {
                self.state = OverlayState::Hidden;
                Some(ExtensionMessage::OpenPopup)
            }
            _ => None,
        }
    }

    /// Auto-dismiss fires regardless of user interaction once the deadline
    /// passes, matching the timed removal of the injected DOM element.
    fn tick(&mut self, now_ms: i64) {
        if let OverlayState::Visible { deadline_ms, .. } = &self.state {
            if now_ms >= *deadline_ms {
                self.state = OverlayState::Hidden;
            }
        }
    }

    fn state(&self) -> &OverlayState {
        &self.state
    }

    fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible { .. })
    }
}
