pub mod app;
pub mod components;
pub mod dom;
pub mod gallery;
pub mod harness;
pub mod input;
pub mod logging;
pub mod modal;
