//! Element model: the unit of composition and its per-type default tables.
//!
//! An [`Element`] is a shared positional/style envelope plus an
//! [`ElementKind`] payload carrying what only one type has (the social
//! link target, the chart rows). Defaults are pure lookups keyed by
//! [`ElementType`] and, for social links, by the platform registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::{Error, Result};

/// Sentinel background meaning "paint nothing".
pub const TRANSPARENT: &str = "transparent";

/// Bar colours handed out to chart rows, in order.
pub const CHART_COLORS: [&str; 10] = [
    "#10ff92", "#7822ff", "#3b82f6", "#ec4899", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6",
    "#06b6d4", "#84cc16",
];

/// Minimum height of a chart box; rows add to it beyond that.
pub const CHART_MIN_HEIGHT: u32 = 140;
const CHART_BASE_HEIGHT: u32 = 60;
const CHART_ROW_HEIGHT: u32 = 25;

/// Opaque element identifier. Allocated from a monotonically increasing
/// counter, so ids are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// The closed set of element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Social,
    Text,
    Metric,
    Photo,
    Chart,
}

impl ElementType {
    pub const ALL: [ElementType; 5] = [
        ElementType::Social,
        ElementType::Text,
        ElementType::Metric,
        ElementType::Photo,
        ElementType::Chart,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Social => "social",
            ElementType::Text => "text",
            ElementType::Metric => "metric",
            ElementType::Photo => "photo",
            ElementType::Chart => "chart",
        }
    }

    /// Whether border settings are rendered for this type.
    pub fn supports_border(self) -> bool {
        matches!(self, ElementType::Social | ElementType::Photo)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ElementType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownElementType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "normal" => Some(FontWeight::Normal),
            "semibold" => Some(FontWeight::Semibold),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    /// CSS `font-weight` value. `semibold` is not a CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "bold",
        }
    }
}

/// One bar of a chart element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartItem {
    pub label: String,
    /// Percentage in `[0, 100]`
    pub value: u8,
    pub color: String,
}

impl ChartItem {
    pub fn new(label: impl Into<String>, value: i64, color: impl Into<String>) -> Self {
        ChartItem { label: label.into(), value: clamp_percent(value), color: color.into() }
    }
}

/// Clamp any integer into a chart percentage.
pub fn clamp_percent(v: i64) -> u8 {
    v.clamp(0, 100) as u8
}

/// Chart box height for a given number of rows.
pub fn chart_height(rows: usize) -> u32 {
    CHART_MIN_HEIGHT.max(CHART_BASE_HEIGHT + rows as u32 * CHART_ROW_HEIGHT)
}

/// Border controls. Stored on every element; only rendered for types
/// where [`ElementType::supports_border`] holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub enabled: bool,
    pub color: String,
    pub width: u32,
}

impl Default for Border {
    fn default() -> Self {
        Border { enabled: false, color: "#10ff92".to_string(), width: 3 }
    }
}

/// Type-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Social { platform: Option<String>, url: String },
    Text,
    Metric,
    Photo,
    Chart { title: String, items: Vec<ChartItem> },
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Social { .. } => ElementType::Social,
            ElementKind::Text => ElementType::Text,
            ElementKind::Metric => ElementType::Metric,
            ElementKind::Photo => ElementType::Photo,
            ElementKind::Chart { .. } => ElementType::Chart,
        }
    }
}

/// A positioned visual unit on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub label: String,
    /// Rendered text; image source for photos; unused by charts
    pub value: String,
    /// Left edge in canvas pixels, always a grid multiple
    pub x: i32,
    /// Top edge in canvas pixels, always a grid multiple
    pub y: i32,
    pub color: String,
    pub background_color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub border_radius: u32,
    pub padding: u32,
    pub width: u32,
    pub height: u32,
    pub z_index: u32,
    pub shadow: bool,
    pub border: Border,
}

impl Element {
    /// Build a fully populated element of `ty` at `(x, y)`.
    pub fn new(
        id: ElementId,
        ty: ElementType,
        platform: Option<&str>,
        x: i32,
        y: i32,
        z_index: u32,
    ) -> Self {
        let d = resolve_defaults(ty, platform);
        let kind = match ty {
            ElementType::Social => ElementKind::Social {
                platform: platform.map(str::to_string),
                url: d.url,
            },
            ElementType::Text => ElementKind::Text,
            ElementType::Metric => ElementKind::Metric,
            ElementType::Photo => ElementKind::Photo,
            ElementType::Chart => ElementKind::Chart { title: d.chart_title, items: d.chart_items },
        };
        Element {
            id,
            kind,
            label: d.label,
            value: d.value,
            x,
            y,
            color: d.color,
            background_color: d.background_color,
            font_size: d.font_size,
            font_weight: d.font_weight,
            border_radius: d.border_radius,
            padding: d.padding,
            width: d.width,
            height: d.height,
            z_index,
            shadow: d.shadow,
            border: d.border,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn platform(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Social { platform, .. } => platform.as_deref(),
            _ => None,
        }
    }

    /// Link target; only social elements carry one.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Social { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn chart_title(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Chart { title, .. } => Some(title.as_str()),
            _ => None,
        }
    }

    pub fn chart_items(&self) -> &[ChartItem] {
        match &self.kind {
            ElementKind::Chart { items, .. } => items,
            _ => &[],
        }
    }

    /// Bottom edge in canvas pixels. Widened so no stored value can overflow.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

/// Every default an element of a given type starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub label: String,
    pub value: String,
    pub url: String,
    pub color: String,
    pub background_color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub border_radius: u32,
    pub padding: u32,
    pub width: u32,
    pub height: u32,
    pub shadow: bool,
    pub border: Border,
    pub chart_items: Vec<ChartItem>,
    pub chart_title: String,
}

pub fn default_width(ty: ElementType) -> u32 {
    match ty {
        ElementType::Social => 280,
        ElementType::Photo => 120,
        ElementType::Chart => 300,
        ElementType::Text | ElementType::Metric => 100,
    }
}

pub fn default_chart_items() -> Vec<ChartItem> {
    vec![
        ChartItem::new("Item 1", 60, CHART_COLORS[0]),
        ChartItem::new("Item 2", 40, CHART_COLORS[1]),
    ]
}

/// Pure default lookup. `platform` is only consulted for social links;
/// an unknown platform behaves like no platform for label, value and
/// background.
pub fn resolve_defaults(ty: ElementType, platform: Option<&str>) -> Defaults {
    let registered = match ty {
        ElementType::Social => platform.and_then(platform::lookup),
        _ => None,
    };

    let label = match (registered, ty) {
        (Some(p), _) => p.name,
        (None, ElementType::Text) => "Heading",
        (None, ElementType::Metric) => "Followers",
        (None, ElementType::Chart) => "Chart Title",
        (None, ElementType::Photo) => "Photo",
        (None, ElementType::Social) => "Text",
    };
    let value = match (registered, ty) {
        (Some(p), _) => p.placeholder,
        (None, ElementType::Text) => "Write here",
        (None, ElementType::Metric) => "100K+",
        (None, ElementType::Chart) => "Demographics",
        (None, ElementType::Photo) => "https://via.placeholder.com/120x120",
        (None, ElementType::Social) => "Enter text",
    };
    let background_color = match (registered, ty) {
        (Some(p), _) => p.color,
        (None, ElementType::Text) => TRANSPARENT,
        (None, ElementType::Chart) => "rgba(255,255,255,0.1)",
        (None, _) => "#10ff92",
    };
    let url = match (ty, platform) {
        (ElementType::Social, Some(_)) => "https://example.com",
        _ => "",
    };

    let chart_items = if ty == ElementType::Chart { default_chart_items() } else { Vec::new() };
    let height = match ty {
        ElementType::Photo => 120,
        ElementType::Chart => chart_height(chart_items.len()),
        _ => 50,
    };

    Defaults {
        label: label.to_string(),
        value: value.to_string(),
        url: url.to_string(),
        color: "#ffffff".to_string(),
        background_color: background_color.to_string(),
        font_size: match ty {
            ElementType::Text => 24,
            ElementType::Social => 16,
            _ => 18,
        },
        font_weight: match ty {
            ElementType::Text | ElementType::Chart => FontWeight::Bold,
            _ => FontWeight::Semibold,
        },
        border_radius: match ty {
            ElementType::Photo => 50,
            ElementType::Social => 25,
            ElementType::Chart => 15,
            _ => 12,
        },
        padding: match ty {
            ElementType::Social => 16,
            ElementType::Metric => 12,
            ElementType::Chart => 20,
            _ => 8,
        },
        width: default_width(ty),
        height,
        shadow: matches!(ty, ElementType::Social | ElementType::Metric | ElementType::Chart),
        border: Border::default(),
        chart_title: if ty == ElementType::Chart { "Demographics".to_string() } else { String::new() },
        chart_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_parses_closed_set() {
        for t in ElementType::ALL {
            assert_eq!(t.as_str().parse::<ElementType>().unwrap(), t);
        }
        assert!(matches!("video".parse::<ElementType>(), Err(Error::UnknownElementType(_))));
    }

    #[test]
    fn social_defaults_follow_platform() {
        let d = resolve_defaults(ElementType::Social, Some("instagram"));
        assert_eq!(d.label, "Instagram");
        assert_eq!(d.value, "@yourhandle");
        assert_eq!(d.background_color, "#E4405F");
        assert_eq!(d.url, "https://example.com");
        assert_eq!(d.width, 280);
        assert_eq!(d.height, 50);
        assert!(d.shadow);
    }

    #[test]
    fn unknown_platform_falls_back_to_generic() {
        let d = resolve_defaults(ElementType::Social, Some("myspace"));
        assert_eq!(d.label, "Text");
        assert_eq!(d.value, "Enter text");
        assert_eq!(d.background_color, "#10ff92");
    }

    #[test]
    fn platform_ignored_for_other_types() {
        let d = resolve_defaults(ElementType::Metric, Some("youtube"));
        assert_eq!(d.label, "Followers");
        assert_eq!(d.url, "");
    }

    #[test]
    fn chart_defaults() {
        let d = resolve_defaults(ElementType::Chart, None);
        assert_eq!(d.chart_items.len(), 2);
        let total: u32 = d.chart_items.iter().map(|i| i.value as u32).sum();
        assert_eq!(total, 100);
        assert_eq!(d.chart_title, "Demographics");
        assert_eq!(d.height, 140);
        assert_eq!(d.font_weight, FontWeight::Bold);
    }

    #[test]
    fn text_is_transparent_and_flat() {
        let d = resolve_defaults(ElementType::Text, None);
        assert_eq!(d.background_color, TRANSPARENT);
        assert!(!d.shadow);
        assert_eq!(d.font_size, 24);
    }

    #[test]
    fn defaults_are_pure() {
        for t in ElementType::ALL {
            assert_eq!(resolve_defaults(t, Some("x")), resolve_defaults(t, Some("x")));
        }
    }

    #[test]
    fn chart_height_grows_with_rows() {
        assert_eq!(chart_height(0), 140);
        assert_eq!(chart_height(3), 140);
        assert_eq!(chart_height(4), 160);
        assert_eq!(chart_height(6), 210);
    }

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-4), 0);
        assert_eq!(clamp_percent(250), 100);
        assert_eq!(clamp_percent(42), 42);
    }

    #[test]
    fn semibold_maps_to_numeric_css() {
        assert_eq!(FontWeight::Semibold.as_css(), "600");
        assert_eq!(FontWeight::parse("bold"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::parse("heavy"), None);
    }
}
