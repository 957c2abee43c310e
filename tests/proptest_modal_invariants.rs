//! Property-based invariant tests for the lightbox state machine.
//!
//! Verifies, after every step of an arbitrary event sequence:
//! 1. Visible implies open
//! 2. Scroll lock mirrors open
//! 3. An active image is present exactly when open
//! 4. The overlay's `hidden` class equals `!is_open`, `opacity-0` equals `!is_visible`
//! 5. Close requests while closing are no-ops

use gallery_lightbox_ui::dom::{sync_overlay, sync_scroll_lock, ClassSet, ClassToggle};
use gallery_lightbox_ui::modal::{
    ActiveImage, CloseTrigger, ModalCommand, ModalEvent, ModalPhase, ModalState, FADED_CLASS,
    HIDDEN_CLASS, SCROLL_LOCK_CLASS,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Thumbnail(u8),
    Close(CloseTrigger),
    RunFrames,
    FadeCompleted,
}

fn arb_trigger() -> impl Strategy<Value = CloseTrigger> {
    prop_oneof![
        Just(CloseTrigger::CloseButton),
        Just(CloseTrigger::Overlay),
        Just(CloseTrigger::Escape),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u8..4).prop_map(Step::Thumbnail),
        arb_trigger().prop_map(Step::Close),
        Just(Step::RunFrames),
        Just(Step::FadeCompleted),
    ]
}

struct Driver {
    state: ModalState,
    frames: Vec<ModalEvent>,
    overlay: ClassSet,
    body: ClassSet,
}

impl Driver {
    fn new() -> Self {
        Self {
            state: ModalState::new(),
            frames: Vec::new(),
            overlay: ClassSet::with_classes(&[HIDDEN_CLASS, FADED_CLASS]),
            body: ClassSet::default(),
        }
    }

    fn send(&mut self, event: ModalEvent) {
        if let Some(ModalCommand::RequestFrame(token)) = self.state.apply(event) {
            self.frames.push(ModalEvent::FrameTick(token));
        }
        sync_overlay(&self.overlay, &self.state);
        sync_scroll_lock(&self.body, &self.state);
    }

    fn step(&mut self, step: Step) {
        match step {
            Step::Thumbnail(n) => self.send(ModalEvent::ThumbnailActivated(ActiveImage::new(
                format!("images/{}.jpg", n),
                format!("Image {}", n),
            ))),
            Step::Close(trigger) => self.send(ModalEvent::CloseRequested(trigger)),
            Step::RunFrames => {
                for tick in std::mem::take(&mut self.frames) {
                    self.send(tick);
                }
            }
            Step::FadeCompleted => self.send(ModalEvent::FadeCompleted),
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(steps in prop::collection::vec(arb_step(), 0..64)) {
        let mut driver = Driver::new();
        for step in steps {
            driver.step(step);
            let state = &driver.state;

            prop_assert!(!state.is_visible() || state.is_open());
            prop_assert_eq!(state.scroll_locked(), state.is_open());
            prop_assert_eq!(state.active_image().is_some(), state.is_open());
            prop_assert_eq!(driver.overlay.has_class(HIDDEN_CLASS), !state.is_open());
            prop_assert_eq!(driver.overlay.has_class(FADED_CLASS), !state.is_visible());
            prop_assert_eq!(driver.body.has_class(SCROLL_LOCK_CLASS), state.is_open());
        }
    }

    #[test]
    fn close_while_closing_is_noop(
        prefix in prop::collection::vec(arb_step(), 0..32),
        trigger in arb_trigger(),
    ) {
        let mut driver = Driver::new();
        for step in prefix {
            driver.step(step);
        }
        if driver.state.phase() == ModalPhase::Closing {
            let before = driver.state.clone();
            driver.step(Step::Close(trigger));
            prop_assert_eq!(driver.state, before);
        }
    }

    #[test]
    fn open_then_frame_is_always_visible(n in 0u8..4) {
        let mut driver = Driver::new();
        driver.step(Step::Thumbnail(n));
        driver.step(Step::RunFrames);
        prop_assert_eq!(driver.state.phase(), ModalPhase::Open);
        prop_assert_eq!(
            driver.state.active_image().map(|i| i.src.clone()),
            Some(format!("images/{}.jpg", n))
        );
    }
}
