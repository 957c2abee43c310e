use crate::components::{GalleryGrid, Lightbox};
use crate::dom::sync_scroll_lock;
use crate::gallery::GalleryImage;
use crate::input::key_event;
use crate::modal::{ModalCommand, ModalEvent, ModalState};
use leptos::ev;
use leptos::prelude::*;

/// Shared handle on the lightbox state, provided as context.
#[derive(Clone, Copy)]
pub struct LightboxCtx {
    pub state: ReadSignal<ModalState>,
    set_state: WriteSignal<ModalState>,
}

impl LightboxCtx {
    pub fn new() -> Self {
        let (state, set_state) = signal(ModalState::new());
        Self { state, set_state }
    }

    /// Look the context up for `component`, logging when it was rendered
    /// outside of `App`.
    pub fn from_context(component: &str) -> Option<Self> {
        let ctx = use_context::<Self>();
        if ctx.is_none() {
            tracing::error!(component, "rendered outside of App");
        }
        ctx
    }

    /// Feed one event through the state machine and schedule whatever it asks for.
    pub fn dispatch(self, event: ModalEvent) {
        let mut command = None;
        self.set_state.update(|state| command = state.apply(event));

        if let Some(ModalCommand::RequestFrame(token)) = command {
            request_animation_frame(move || self.dispatch(ModalEvent::FrameTick(token)));
        }
    }
}

impl Default for LightboxCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App(images: Vec<GalleryImage>) -> impl IntoView {
    let ctx = LightboxCtx::new();
    provide_context(ctx);

    // Escape is listened for on the window so it works without focus.
    let _ = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if let Some(event) = key_event(&ev.key()) {
            ctx.dispatch(event);
        }
    });

    Effect::new(move || {
        let state = ctx.state.get();
        match document().body() {
            Some(body) => sync_scroll_lock(&body, &state),
            None => tracing::warn!("document has no body, scroll lock skipped"),
        }
    });

    tracing::info!(count = images.len(), "gallery ready");

    view! {
        <main class="gallery-page">
            <GalleryGrid images=images />
            <Lightbox />
        </main>
    }
}
