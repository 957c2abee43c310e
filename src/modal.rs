pub const HIDDEN_CLASS: &str = "hidden";
pub const FADED_CLASS: &str = "opacity-0";
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Image currently shown in the overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveImage {
    pub src: String,
    pub alt: String,
}

impl ActiveImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Overlay,
    Escape,
}

/// Identifies the open an animation-frame callback was scheduled for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameToken(u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    ThumbnailActivated(ActiveImage),
    CloseRequested(CloseTrigger),
    FrameTick(FrameToken),
    FadeCompleted,
}

/// Work the caller has to schedule on the controller's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalCommand {
    /// Deliver `ModalEvent::FrameTick(token)` from the next animation frame.
    RequestFrame(FrameToken),
}

/// Visual flags carried by the overlay element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayClasses {
    pub hidden: bool,
    pub faded: bool,
}

/// Open/close state of the lightbox overlay.
///
/// `is_open`, `is_visible` and `scroll_locked` are all derived from the
/// phase, so a visible-but-closed overlay cannot be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    phase: ModalPhase,
    active_image: Option<ActiveImage>,
    frame: FrameToken,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn active_image(&self) -> Option<&ActiveImage> {
        self.active_image.as_ref()
    }

    pub fn overlay_classes(&self) -> OverlayClasses {
        OverlayClasses {
            hidden: !self.is_open(),
            faded: !self.is_visible(),
        }
    }

    pub fn apply(&mut self, event: ModalEvent) -> Option<ModalCommand> {
        transition(self, event)
    }
}

/// Advance the lightbox state machine by one event.
///
/// Events that make no sense in the current phase are dropped, which is what
/// makes repeated close requests and stray `transitionend`s harmless.
pub fn transition(state: &mut ModalState, event: ModalEvent) -> Option<ModalCommand> {
    let from = state.phase;
    let command = match (from, event) {
        (ModalPhase::Closed, ModalEvent::ThumbnailActivated(image)) => {
            state.frame = FrameToken(state.frame.0.wrapping_add(1));
            state.active_image = Some(image);
            state.phase = ModalPhase::Opening;
            Some(ModalCommand::RequestFrame(state.frame))
        }
        (ModalPhase::Opening, ModalEvent::FrameTick(token)) if token == state.frame => {
            state.phase = ModalPhase::Open;
            None
        }
        // Never became visible, so there is no fade to wait for.
        (ModalPhase::Opening, ModalEvent::CloseRequested(_)) => {
            state.phase = ModalPhase::Closed;
            state.active_image = None;
            None
        }
        (ModalPhase::Open, ModalEvent::CloseRequested(_)) => {
            state.phase = ModalPhase::Closing;
            None
        }
        (ModalPhase::Closing, ModalEvent::FadeCompleted) => {
            state.phase = ModalPhase::Closed;
            state.active_image = None;
            None
        }
        (_, ignored) => {
            tracing::trace!(phase = ?from, event = ?ignored, "lightbox event ignored");
            return None;
        }
    };

    tracing::debug!(from = ?from, to = ?state.phase, "lightbox transition");
    command
}
