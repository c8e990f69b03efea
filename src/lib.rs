//! MediaKit
//!
//! Layout and export engine for creator media kits: a fixed-width,
//! dynamically tall canvas of positioned elements (social links, text,
//! metrics, photos, charts) that serializes to one self-contained HTML file.
//!
//! # Features
//!
//! - **Pure transitions**: [`EditorState`] is updated by consuming
//!   transitions, so every edit can be tested without a UI
//! - **Grid layout**: coordinates snap to a 5px grid and stay on the canvas
//! - **Two surfaces, one resolver**: the editor canvas and the exported
//!   document both render through [`rendering::resolve`]
//!
//! # Example
//!
//! ```
//! use mediakit::{export_document, BuiltinIcons, EditorState, ElementType, KitConfig};
//!
//! let config = KitConfig::default();
//! let state = EditorState::new(&config)
//!     .add_element(ElementType::Social, Some("instagram"))
//!     .add_element(ElementType::Chart, None)
//!     .set_creator_name("Ana Costa".to_string());
//!
//! let doc = export_document(&state, &config.attribution, &BuiltinIcons::new());
//! assert_eq!(doc.file_name, "ana-costa-mediakit.html");
//! assert!(doc.html.contains("Ana Costa - Media Kit"));
//! ```

use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod element;
pub mod gradient;
pub mod interaction;
// Collaborator seams: icon registry and file delivery
pub mod platform;
pub mod records;
pub mod rendering;
pub mod state;
pub mod templates;

pub use element::{ChartItem, Element, ElementId, ElementKind, ElementType, FontWeight};
pub use gradient::{BackgroundGradient, ColorStop, GradientKind};
pub use interaction::{Controller, DragState, InputEvent, Key};
pub use platform::{BuiltinIcons, DirectorySink, DownloadSink, IconRegistry, MemorySink};
pub use records::{ElementRecord, KitDocument};
pub use rendering::{export_document, render_canvas, ExportedDocument};
pub use state::{Action, EditorState, LayerDirection, PropertyKey, Selection};
pub use templates::{Template, TEMPLATES};

/// Footer credit baked into every export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub text: String,
    pub link: String,
    pub logo_url: String,
    pub logo_alt: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            text: "Powered by TrueConext".to_string(),
            link: "https://trueconext.com/".to_string(),
            logo_url: "https://raw.githubusercontent.com/Trueconext/TrueConextW/refs/heads/main/Icon%20Only%20No%20Background.png".to_string(),
            logo_alt: "TrueConext Logo".to_string(),
        }
    }
}

/// Configuration for a new editing session
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
///
/// # Examples
///
/// ```
/// let cfg = mediakit::KitConfig::default();
/// assert_eq!(cfg.creator_name, "Creator Name");
/// assert!(!cfg.backspace_deletes);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Name used for the document title and the export file name
    pub creator_name: String,
    /// Initial background
    pub gradient: BackgroundGradient,
    /// Whether Backspace deletes the selected element like Delete does
    pub backspace_deletes: bool,
    pub attribution: Attribution,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            creator_name: "Creator Name".to_string(),
            gradient: BackgroundGradient::default(),
            backspace_deletes: false,
            attribution: Attribution::default(),
        }
    }
}

impl KitConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KitConfig::default();
        assert_eq!(config.gradient.stops.len(), 2);
        assert_eq!(config.attribution.link, "https://trueconext.com/");
    }

    #[test]
    fn test_partial_config() {
        let config = KitConfig::from_json(r#"{"creator_name": "Ana", "attribution": {"text": "Made by Ana"}}"#).unwrap();
        assert_eq!(config.creator_name, "Ana");
        assert_eq!(config.attribution.text, "Made by Ana");
        assert_eq!(config.attribution.logo_alt, "TrueConext Logo");
        assert!(!config.backspace_deletes);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(KitConfig::from_json("{"), Err(Error::Json(_))));
    }
}
