//! Style resolver: element + render mode -> style declaration and content.
//!
//! The editor canvas and the exported document both go through
//! [`resolve`], so the two surfaces differ only where the mode says they
//! must: editor boxes are placed in absolute pixels, exported boxes in
//! percentages of the canvas so the exported container can be fluid.
//! Editor-only affordances (selection ring, drag cursor) are carried as
//! classes, never as declarations.

use std::fmt;

use crate::element::{ChartItem, Element, ElementKind, TRANSPARENT};
use crate::platform::IconRegistry;
use crate::rendering::escape_html;
use crate::rendering::layout::CANVAS_WIDTH;

pub const SHADOW: &str = "0 8px 32px rgba(0, 0, 0, 0.3)";
const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/120x120";

/// Which surface the element is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Live editor canvas, pixel coordinates
    Editor { preview: bool, selected: bool },
    /// Standalone document, coordinates as percentages of the canvas
    Export { canvas_height: u32 },
}

/// Ordered list of CSS declarations. Order is part of the output contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Style { decls: Vec::new() }
    }

    pub fn push(&mut self, prop: &'static str, value: impl Into<String>) {
        self.decls.push((prop, value.into()));
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls.iter().find(|(p, _)| *p == prop).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.get(prop).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", p, v)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Anchor,
}

/// What goes inside the element box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Image { src: String, alt: String, radius: u32 },
    Chart { title: String, rows: Vec<ChartItem> },
    Link { icon_svg: String, text: String },
    Text(String),
}

/// A resolved element, ready for any string or tree renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub tag: Tag,
    /// Navigable target; `None` keeps an anchor inert
    pub href: Option<String>,
    pub classes: Vec<&'static str>,
    pub style: Style,
    pub content: Content,
}

fn percent(num: i32, den: u32) -> String {
    // Multiply first so whole percentages come out exact.
    let den = den.max(1) as f64;
    format!("{}%", num as f64 * 100.0 / den)
}

/// Resolve one element. Pure: the same element and mode always produce the
/// same output.
pub fn resolve(el: &Element, mode: RenderMode, icons: &dyn IconRegistry) -> Resolved {
    let ty = el.element_type();
    let linked = match &el.kind {
        ElementKind::Social { url, .. } if !url.is_empty() => Some(url.as_str()),
        _ => None,
    };

    let mut style = Style::new();
    style.push("position", "absolute");
    match mode {
        RenderMode::Editor { .. } => {
            style.push("left", format!("{}px", el.x));
            style.push("top", format!("{}px", el.y));
        }
        RenderMode::Export { canvas_height } => {
            style.push("left", percent(el.x, CANVAS_WIDTH));
            style.push("top", percent(el.y, canvas_height));
        }
    }
    style.push("color", el.color.clone());
    style.push("font-size", format!("{}px", el.font_size));
    style.push("font-weight", el.font_weight.as_css());
    style.push("z-index", el.z_index.to_string());
    style.push("border-radius", format!("{}px", el.border_radius));
    style.push("width", format!("{}px", el.width));
    style.push("height", format!("{}px", el.height));
    style.push("padding", format!("{}px", el.padding));
    if el.background_color != TRANSPARENT {
        style.push("background", el.background_color.clone());
    }
    // Inert for text, metric and chart even when enabled.
    if el.border.enabled && el.border.color != TRANSPARENT && ty.supports_border() {
        style.push("border", format!("{}px solid {}", el.border.width, el.border.color));
    }
    if el.shadow {
        style.push("box-shadow", SHADOW);
    }
    style.push("transition", "transform 0.2s ease");
    style.push("display", "flex");
    style.push("align-items", "center");
    style.push("justify-content", "center");
    if linked.is_some() {
        style.push("text-decoration", "none");
    }

    let content = match &el.kind {
        ElementKind::Photo => Content::Image {
            src: if el.value.is_empty() { PHOTO_PLACEHOLDER.to_string() } else { el.value.clone() },
            alt: el.label.clone(),
            radius: el.border_radius,
        },
        ElementKind::Chart { title, items } => Content::Chart {
            title: if title.is_empty() { "Chart".to_string() } else { title.clone() },
            rows: items.clone(),
        },
        ElementKind::Social { platform, .. } if linked.is_some() => Content::Link {
            icon_svg: icons.render(platform.as_deref()),
            text: el.value.clone(),
        },
        _ => Content::Text(el.value.clone()),
    };

    let (classes, href) = match mode {
        RenderMode::Export { .. } => (vec!["hover-scale"], linked.map(str::to_string)),
        RenderMode::Editor { preview, selected } => {
            let mut classes = vec!["canvas-element"];
            if selected && !preview {
                classes.push("selected");
            }
            (classes, if preview { linked.map(str::to_string) } else { None })
        }
    };

    Resolved {
        tag: if linked.is_some() { Tag::Anchor } else { Tag::Div },
        href,
        classes,
        style,
        content,
    }
}

impl Content {
    /// Inner markup. Identical for both modes.
    pub fn to_html(&self) -> String {
        match self {
            Content::Image { src, alt, radius } => format!(
                r#"<img src="{}" alt="{}" style="width: 100%; height: 100%; border-radius: {}px; object-fit: cover;" />"#,
                escape_html(src),
                escape_html(alt),
                radius
            ),
            Content::Chart { title, rows } => {
                let mut out = String::from(r#"<div style="width: 100%; height: 100%;">"#);
                out.push_str(&format!(
                    r#"<div style="text-align: center; font-weight: bold; margin-bottom: 12px; font-size: 14px;">{}</div><div>"#,
                    escape_html(title)
                ));
                for row in rows {
                    out.push_str(&chart_row_html(row));
                }
                out.push_str("</div></div>");
                out
            }
            Content::Link { icon_svg, text } => format!("{}{}", icon_svg, escape_html(text)),
            Content::Text(text) => escape_html(text),
        }
    }
}

fn chart_row_html(row: &ChartItem) -> String {
    format!(
        concat!(
            r#"<div style="display: flex; align-items: center; font-size: 12px; margin-bottom: 6px;">"#,
            r#"<div style="width: 64px; text-align: right; margin-right: 8px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{label}</div>"#,
            r#"<div style="flex: 1; background: rgba(0,0,0,0.2); border-radius: 12px; height: 12px; overflow: hidden;">"#,
            r#"<div style="height: 100%; border-radius: 12px; width: {value}%; background: {color}; transition: all 0.3s;"></div>"#,
            r#"</div>"#,
            r#"<div style="width: 40px; text-align: left; margin-left: 8px; font-size: 12px;">{value}%</div>"#,
            r#"</div>"#
        ),
        label = escape_html(&row.label),
        value = row.value,
        color = escape_html(&row.color),
    )
}

impl Resolved {
    /// Complete element markup.
    pub fn to_html(&self) -> String {
        let class = self.classes.join(" ");
        let style = escape_html(&self.style.to_string());
        let inner = self.content.to_html();
        match (self.tag, &self.href) {
            (Tag::Div, _) => format!(r#"<div class="{}" style="{}">{}</div>"#, class, style, inner),
            (Tag::Anchor, Some(href)) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}" style="{}">{}</a>"#,
                escape_html(href),
                class,
                style,
                inner
            ),
            (Tag::Anchor, None) => format!(r#"<a class="{}" style="{}">{}</a>"#, class, style, inner),
        }
    }
}
