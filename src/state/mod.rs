pub mod engine;
pub mod geometry;
pub mod history;
pub mod surface;
pub mod touch;
pub mod view;

pub use engine::{ColoringCore, Effect, Layout};
pub use geometry::{Point, Rect};
pub use surface::TemplateImage;
