use crate::app::LightboxCtx;
use crate::dom::sync_overlay;
use crate::input::{close_button_click, overlay_click};
use crate::modal::ModalEvent;
use leptos::prelude::*;

#[component]
pub fn Lightbox() -> impl IntoView {
    let Some(ctx) = LightboxCtx::from_context("Lightbox") else {
        return None;
    };
    let overlay_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = ctx.state.get();
        if let Some(overlay) = overlay_ref.get() {
            sync_overlay(&*overlay, &state);
        }
    });

    let image_src = move || ctx.state.with(|s| s.active_image().map(|i| i.src.clone()).unwrap_or_default());
    let image_alt = move || ctx.state.with(|s| s.active_image().map(|i| i.alt.clone()).unwrap_or_default());

    Some(view! {
        <div
            id="imageModal"
            class="lightbox-overlay hidden opacity-0"
            node_ref=overlay_ref
            on:click=move |ev: web_sys::MouseEvent| {
                // Bubbled clicks from the image or the button have another target.
                if let Some(event) = overlay_click(ev.target() == ev.current_target()) {
                    ctx.dispatch(event);
                }
            }
            on:transitionend=move |ev: web_sys::TransitionEvent| {
                if ev.target() == ev.current_target() && ev.property_name() == "opacity" {
                    ctx.dispatch(ModalEvent::FadeCompleted);
                }
            }
        >
            <button
                id="closeModal"
                class="lightbox-close"
                aria-label="Close"
                on:click=move |_| ctx.dispatch(close_button_click())
            >
                "×"
            </button>
            <img id="modalImage" class="lightbox-image" src=image_src alt=image_alt />
        </div>
    })
}
