//! Export serializer: the whole composition as one standalone HTML file.

use log::info;
use sha2::{Digest, Sha256};

use crate::platform::{DownloadSink, IconRegistry};
use crate::rendering::escape_html;
use crate::rendering::style::{resolve, RenderMode};
use crate::state::EditorState;
use crate::{Attribution, Result};

pub const HTML_MIME: &str = "text/html";

/// A finished export, ready for a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub html: String,
    pub file_name: String,
    pub mime: &'static str,
}

impl ExportedDocument {
    /// Hex sha256 of the document bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }

    pub fn deliver(&self, sink: &dyn DownloadSink) -> Result<()> {
        sink.deliver(self.mime, &self.html, &self.file_name)
    }
}

/// Lowercase, then collapse every run of characters outside `[a-z0-9]`
/// into one hyphen. Leading and trailing hyphens are kept.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

pub fn file_name_for(creator_name: &str) -> String {
    format!("{}-mediakit.html", slugify(creator_name))
}

/// Serialize `state`. Pure: the same state always yields the same bytes.
pub fn export_document(
    state: &EditorState,
    attribution: &Attribution,
    icons: &dyn IconRegistry,
) -> ExportedDocument {
    let canvas_height = state.canvas_height();
    let mode = RenderMode::Export { canvas_height };

    let mut elements = String::new();
    for el in state.paint_order() {
        elements.push_str("        ");
        elements.push_str(&resolve(el, mode, icons).to_html());
        elements.push('\n');
    }

    let name = escape_html(state.creator_name());
    let gradient = state.gradient().css();
    let html = format!(
        include_str!("export_template.html"),
        name = name,
        gradient = gradient,
        canvas_height = canvas_height,
        elements = elements,
        link = escape_html(&attribution.link),
        logo = escape_html(&attribution.logo_url),
        logo_alt = escape_html(&attribution.logo_alt),
        text = escape_html(&attribution.text),
    );

    let file_name = file_name_for(state.creator_name());
    info!(
        "exported {} elements to {} ({} bytes, canvas {}px)",
        state.elements().len(),
        file_name,
        html.len(),
        canvas_height
    );
    ExportedDocument { html, file_name, mime: HTML_MIME }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;
    use crate::platform::{BuiltinIcons, MemorySink};

    fn export(state: &EditorState) -> ExportedDocument {
        export_document(state, &Attribution::default(), &BuiltinIcons::new())
    }

    #[test]
    fn slug_rules() {
        assert_eq!(slugify("Creator Name"), "creator-name");
        assert_eq!(slugify("  Jane__Doe!! 2"), "-jane-doe-2");
        assert_eq!(slugify("ÉLAN"), "-lan");
        assert_eq!(file_name_for("Ana"), "ana-mediakit.html");
    }

    #[test]
    fn export_is_idempotent() {
        let s = EditorState::default()
            .add_element(ElementType::Social, Some("instagram"))
            .add_element(ElementType::Chart, None);
        let a = export(&s);
        let b = export(&s);
        assert_eq!(a, b);
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);
    }

    #[test]
    fn shell_carries_name_gradient_and_height() {
        let s = EditorState::default().set_creator_name("Ana <3".into());
        let doc = export(&s);
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<title>Ana &lt;3 - Media Kit</title>"));
        assert_eq!(doc.html.matches(&s.gradient().css()).count(), 2);
        assert!(doc.html.contains("height: 600px;"));
        assert!(doc.html.contains("@media (max-width: 480px)"));
        assert!(doc.html.contains("Powered by TrueConext"));
        assert_eq!(doc.file_name, "ana-3-mediakit.html");
        assert_eq!(doc.mime, HTML_MIME);
    }

    #[test]
    fn elements_emitted_in_z_order() {
        let s = EditorState::default()
            .add_element(ElementType::Text, None)
            .add_element(ElementType::Metric, None);
        let first = s.elements()[0].id;
        let s = s.move_layer(first, crate::state::LayerDirection::Up).move_layer(first, crate::state::LayerDirection::Up);
        let html = export(&s).html;
        let metric = html.find("100K+").unwrap();
        let text = html.find("Write here").unwrap();
        assert!(metric < text);
    }

    #[test]
    fn deliver_goes_through_sink() {
        let doc = export(&EditorState::default());
        let sink = MemorySink::new();
        doc.deliver(&sink).unwrap();
        let got = sink.downloads();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].file_name, "creator-name-mediakit.html");
        assert_eq!(got[0].mime, "text/html");
        assert_eq!(got[0].payload, doc.html);
    }
}
