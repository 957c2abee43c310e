use gallery_lightbox_ui::app::App;
use gallery_lightbox_ui::gallery::{LightboxConfig, CONFIG_ELEMENT_ID};
use gallery_lightbox_ui::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = LightboxConfig::load_from_document(&document(), CONFIG_ELEMENT_ID);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let level = config.level();
    logging::init(*level.as_ref().unwrap_or(&tracing::Level::INFO));

    if let Err(err) = &loaded {
        tracing::warn!(%err, "using an empty gallery");
    }
    if let Err(err) = &level {
        tracing::warn!(%err, "falling back to info logging");
    }

    let images = config.images;
    mount_to_body(move || view! { <App images=images.clone() /> });
}
