/// What an element renders when it has no children.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Text measured with the document's glyph metrics.
    Text(String),
    /// Replaced content with a fixed intrinsic size (images, canvases).
    Fixed { width: f32, height: f32 },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn fixed(width: f32, height: f32) -> Self {
        Content::Fixed { width, height }
    }
}
