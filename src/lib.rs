//! Coloring canvas for a children's learning app: template picker, freehand
//! coloring with undo, pinch/pan/double-tap zoom, PNG export and the native
//! audio bridge.

pub mod audio;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod util;
