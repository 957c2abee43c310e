mod gallery_grid;
mod lightbox;

pub use gallery_grid::GalleryGrid;
pub use lightbox::Lightbox;
