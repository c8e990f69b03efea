//! Plain element records: the shape a composition takes at rest.
//!
//! Field names follow the element attribute names (camelCase), so a saved
//! document is what a persistence layer or a browser session would store.

use serde::{Deserialize, Serialize};

use crate::element::{
    clamp_percent, Border, ChartItem, Element, ElementId, ElementKind, ElementType, FontWeight,
};
use crate::gradient::BackgroundGradient;
use crate::rendering::layout::{clamp_extent, snap_to_grid};
use crate::state::EditorState;
use crate::{Error, Result};

pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub creator_name: String,
    #[serde(default)]
    pub gradient: BackgroundGradient,
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartItemRecord {
    pub label: String,
    pub value: i64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub id: ElementId,
    /// Kept as a string so an unknown type is reported, not a parse failure
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub background_color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub border_radius: u32,
    pub padding: u32,
    pub width: u32,
    pub height: u32,
    pub z_index: u32,
    #[serde(default)]
    pub shadow: bool,
    // Older sessions predate border controls.
    #[serde(default)]
    pub has_border: Option<bool>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartItemRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_title: Option<String>,
}

impl From<&Element> for ElementRecord {
    fn from(el: &Element) -> Self {
        let (platform, url, chart_title, chart_data) = match &el.kind {
            ElementKind::Social { platform, url } => (platform.clone(), Some(url.clone()), None, None),
            ElementKind::Chart { title, items } => (
                None,
                None,
                Some(title.clone()),
                Some(
                    items
                        .iter()
                        .map(|i| ChartItemRecord { label: i.label.clone(), value: i.value as i64, color: i.color.clone() })
                        .collect(),
                ),
            ),
            _ => (None, None, None, None),
        };
        ElementRecord {
            id: el.id,
            element_type: el.element_type().to_string(),
            platform,
            label: el.label.clone(),
            value: el.value.clone(),
            url,
            x: el.x as f64,
            y: el.y as f64,
            color: el.color.clone(),
            background_color: el.background_color.clone(),
            font_size: el.font_size,
            font_weight: el.font_weight,
            border_radius: el.border_radius,
            padding: el.padding,
            width: el.width,
            height: el.height,
            z_index: el.z_index,
            shadow: el.shadow,
            has_border: Some(el.border.enabled),
            border_color: Some(el.border.color.clone()),
            border_width: Some(el.border.width),
            chart_data,
            chart_title,
        }
    }
}

impl TryFrom<ElementRecord> for Element {
    type Error = Error;

    fn try_from(r: ElementRecord) -> Result<Element> {
        let ty: ElementType = r.element_type.parse()?;
        let kind = match ty {
            ElementType::Social => ElementKind::Social { platform: r.platform, url: r.url.unwrap_or_default() },
            ElementType::Text => ElementKind::Text,
            ElementType::Metric => ElementKind::Metric,
            ElementType::Photo => ElementKind::Photo,
            ElementType::Chart => ElementKind::Chart {
                title: r.chart_title.unwrap_or_default(),
                items: r
                    .chart_data
                    .unwrap_or_default()
                    .into_iter()
                    .map(|i| ChartItem { label: i.label, value: clamp_percent(i.value), color: i.color })
                    .collect(),
            },
        };
        if !r.x.is_finite() || !r.y.is_finite() {
            return Err(Error::InvalidRecord(format!("{}: non-finite position", r.id)));
        }
        let fallback = Border::default();
        Ok(Element {
            id: r.id,
            kind,
            label: r.label,
            value: r.value,
            x: snap_to_grid(r.x),
            y: snap_to_grid(r.y),
            color: r.color,
            background_color: r.background_color,
            font_size: clamp_extent(r.font_size as i64),
            font_weight: r.font_weight,
            border_radius: clamp_extent(r.border_radius as i64),
            padding: clamp_extent(r.padding as i64),
            width: clamp_extent(r.width as i64),
            height: clamp_extent(r.height as i64),
            z_index: r.z_index,
            shadow: r.shadow,
            border: Border {
                enabled: r.has_border.unwrap_or(fallback.enabled),
                color: r.border_color.unwrap_or(fallback.color),
                width: r.border_width.map_or(fallback.width, |w| clamp_extent(w as i64)),
            },
        })
    }
}

impl EditorState {
    pub fn to_document(&self) -> KitDocument {
        KitDocument {
            version: DOCUMENT_VERSION,
            creator_name: self.creator_name().to_string(),
            gradient: self.gradient().clone(),
            elements: self.elements().iter().map(ElementRecord::from).collect(),
        }
    }

    /// Load a saved document. Selection and preview start cleared.
    pub fn from_document(doc: KitDocument) -> Result<Self> {
        let mut elements = Vec::with_capacity(doc.elements.len());
        for record in doc.elements {
            let el = Element::try_from(record)?;
            if elements.iter().any(|e: &Element| e.id == el.id) {
                return Err(Error::InvalidRecord(format!("duplicate id {}", el.id)));
            }
            elements.push(el);
        }
        Ok(EditorState::from_parts(doc.creator_name, doc.gradient, elements))
    }
}
