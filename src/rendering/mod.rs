//! Rendering: layout arithmetic, style resolution and the two string
//! surfaces built on it (the live editor canvas and the exported document).

pub mod canvas;
pub mod export;
pub mod layout;
pub mod style;

pub use canvas::render_canvas;
pub use export::{export_document, slugify, ExportedDocument, HTML_MIME};
pub use style::{resolve, Content, RenderMode, Resolved, Style, Tag};

/// Escape text for HTML content and double-quoted attributes.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
