use crate::app::LightboxCtx;
use crate::gallery::GalleryImage;
use crate::input::thumbnail_click;
use leptos::prelude::*;

#[component]
pub fn GalleryGrid(images: Vec<GalleryImage>) -> impl IntoView {
    let Some(ctx) = LightboxCtx::from_context("GalleryGrid") else {
        return None;
    };

    let items = images
        .into_iter()
        .map(|image| {
            let src = image.src.clone();
            let alt = image.alt.clone();
            view! {
                <button
                    class="gallery-image-item"
                    on:click=move |_| ctx.dispatch(thumbnail_click(&image))
                >
                    <img src=src alt=alt loading="lazy" />
                </button>
            }
        })
        .collect_view();

    Some(view! { <section class="gallery-grid">{items}</section> })
}
