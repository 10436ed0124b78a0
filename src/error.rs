// Error type shared by the canvas core and the browser glue.

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("template image failed to load: {0}")]
    TemplateLoad(String),
    #[error("template has zero size ({width}x{height})")]
    EmptyTemplate { width: u32, height: u32 },
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    PixelBufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error("export failed: {0}")]
    Export(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

