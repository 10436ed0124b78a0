pub mod app;
pub mod canvas_host;
pub mod coloring_view;
pub mod palette_panel;
pub mod sound_settings;
pub mod template_picker;
pub mod toolbar;
pub mod zoom_controls;
