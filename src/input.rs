use crate::gallery::GalleryImage;
use crate::modal::{CloseTrigger, ModalEvent};

/// Map a `KeyboardEvent.key` value to a lightbox event.
pub fn key_event(key: &str) -> Option<ModalEvent> {
    match key {
        // "Esc" is what older Edge/IE report
        "Escape" | "Esc" => Some(ModalEvent::CloseRequested(CloseTrigger::Escape)),
        _ => None,
    }
}

/// A click reaching the overlay only closes it when the overlay itself was
/// the target. Clicks on the image bubble up with a different target.
pub fn overlay_click(target_is_overlay: bool) -> Option<ModalEvent> {
    target_is_overlay.then_some(ModalEvent::CloseRequested(CloseTrigger::Overlay))
}

pub fn close_button_click() -> ModalEvent {
    ModalEvent::CloseRequested(CloseTrigger::CloseButton)
}

pub fn thumbnail_click(image: &GalleryImage) -> ModalEvent {
    ModalEvent::ThumbnailActivated(image.to_active())
}
