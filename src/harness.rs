//! In-process stand-in for the lightbox page.
//!
//! `SimulatedPage` holds the class lists of the overlay and the body, the
//! attributes of the modal image and a queue of pending animation-frame
//! callbacks. Clicks and key presses go through the same input
//! classification and class synchronization the web view uses, so tests can
//! assert on class-list transitions without a browser.

use crate::dom::{sync_overlay, sync_scroll_lock, ClassSet, ClassToggle};
use crate::gallery::GalleryImage;
use crate::input::{close_button_click, key_event, overlay_click, thumbnail_click};
use crate::modal::{ActiveImage, FrameToken, ModalCommand, ModalEvent, ModalState, FADED_CLASS, HIDDEN_CLASS};

pub const OVERLAY_BASE_CLASS: &str = "lightbox-overlay";

pub struct SimulatedPage {
    images: Vec<GalleryImage>,
    thumbnails: Vec<ActiveImage>,
    state: ModalState,
    overlay: ClassSet,
    body: ClassSet,
    modal_image: ActiveImage,
    pending_frames: Vec<FrameToken>,
}

impl SimulatedPage {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        // `src` and `alt` of each gallery item's `<img>`, as the grid renders them.
        let thumbnails = images
            .iter()
            .map(|image| ActiveImage::new(image.src.clone(), image.alt.clone()))
            .collect();
        Self {
            images,
            thumbnails,
            state: ModalState::new(),
            overlay: ClassSet::with_classes(&[OVERLAY_BASE_CLASS, HIDDEN_CLASS, FADED_CLASS]),
            body: ClassSet::default(),
            modal_image: ActiveImage::default(),
            pending_frames: Vec::new(),
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// `src` and `alt` of the thumbnail `<img>` at `index`.
    pub fn thumbnail(&self, index: usize) -> Option<&ActiveImage> {
        self.thumbnails.get(index)
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn overlay_has(&self, class: &str) -> bool {
        self.overlay.has_class(class)
    }

    pub fn body_has(&self, class: &str) -> bool {
        self.body.has_class(class)
    }

    pub fn overlay_classes(&self) -> Vec<String> {
        self.overlay.to_vec()
    }

    /// `src` and `alt` currently set on the modal `<img>`.
    pub fn modal_image(&self) -> &ActiveImage {
        &self.modal_image
    }

    pub fn pending_frames(&self) -> usize {
        self.pending_frames.len()
    }

    /// Click the gallery item at `index`. Out-of-range indices click nothing.
    pub fn click_thumbnail(&mut self, index: usize) {
        let Some(image) = self.images.get(index) else {
            return;
        };
        let event = thumbnail_click(image);
        self.dispatch(event);
    }

    pub fn click_close_button(&mut self) {
        self.dispatch(close_button_click());
        // The button sits inside the overlay, so the click bubbles there too.
        self.bubble_to_overlay(false);
    }

    pub fn click_overlay(&mut self) {
        self.bubble_to_overlay(true);
    }

    pub fn click_modal_image(&mut self) {
        self.bubble_to_overlay(false);
    }

    pub fn keydown(&mut self, key: &str) {
        if let Some(event) = key_event(key) {
            self.dispatch(event);
        }
    }

    /// Deliver the overlay's `transitionend`.
    pub fn transition_end(&mut self) {
        self.dispatch(ModalEvent::FadeCompleted);
    }

    /// Run every animation-frame callback queued so far.
    pub fn run_animation_frames(&mut self) {
        let frames = std::mem::take(&mut self.pending_frames);
        for token in frames {
            self.dispatch(ModalEvent::FrameTick(token));
        }
    }

    fn bubble_to_overlay(&mut self, target_is_overlay: bool) {
        if let Some(event) = overlay_click(target_is_overlay) {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ModalEvent) {
        if let Some(ModalCommand::RequestFrame(token)) = self.state.apply(event) {
            self.pending_frames.push(token);
        }
        sync_overlay(&self.overlay, &self.state);
        sync_scroll_lock(&self.body, &self.state);
        if let Some(image) = self.state.active_image() {
            self.modal_image = image.clone();
        }
    }
}
