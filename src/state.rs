//! Editor state and its transitions.
//!
//! [`EditorState`] owns the element collection, the single selection, the
//! background gradient and the view mode. Every transition consumes the
//! state and returns the next one, so callers (and tests) never observe a
//! half-applied update. Transitions are total: a missing id or an
//! out-of-range index is a logged no-op.

use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::element::{
    chart_height, clamp_percent, default_width, resolve_defaults, ChartItem, Element, ElementId,
    ElementKind, ElementType, FontWeight, CHART_COLORS,
};
use crate::gradient::{BackgroundGradient, GradientKind};
use crate::rendering::layout::{
    center_horizontally, clamp_drag, clamp_extent, compute_canvas_height, compute_initial_x,
    compute_next_y, snap_to_grid,
};
use crate::{Error, KitConfig, Result};

/// Offset applied to a duplicated element.
const DUPLICATE_OFFSET: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    Selected(ElementId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerDirection {
    Up,
    Down,
}

/// Attributes editable through [`EditorState::update_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKey {
    Label,
    Value,
    Url,
    X,
    Y,
    Color,
    BackgroundColor,
    FontSize,
    FontWeight,
    BorderRadius,
    Padding,
    Width,
    Height,
    Shadow,
    HasBorder,
    BorderColor,
    BorderWidth,
    ChartTitle,
}

impl PropertyKey {
    const NAMES: [(&'static str, PropertyKey); 18] = [
        ("label", PropertyKey::Label),
        ("value", PropertyKey::Value),
        ("url", PropertyKey::Url),
        ("x", PropertyKey::X),
        ("y", PropertyKey::Y),
        ("color", PropertyKey::Color),
        ("backgroundColor", PropertyKey::BackgroundColor),
        ("fontSize", PropertyKey::FontSize),
        ("fontWeight", PropertyKey::FontWeight),
        ("borderRadius", PropertyKey::BorderRadius),
        ("padding", PropertyKey::Padding),
        ("width", PropertyKey::Width),
        ("height", PropertyKey::Height),
        ("shadow", PropertyKey::Shadow),
        ("hasBorder", PropertyKey::HasBorder),
        ("borderColor", PropertyKey::BorderColor),
        ("borderWidth", PropertyKey::BorderWidth),
        ("chartTitle", PropertyKey::ChartTitle),
    ];
}

impl FromStr for PropertyKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PropertyKey::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, key)| *key)
            .ok_or_else(|| Error::UnknownProperty(s.to_string()))
    }
}

/// Leading-integer parse: optional sign, then digits; trailing junk is
/// ignored. `None` when there are no digits.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let n = rest[..end].parse::<i64>().ok()?;
    Some(if neg { -n } else { n })
}

/// Checkbox-style boolean coercion.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on" | "checked")
}

/// A single editor transition, as dispatched by the interaction layer or
/// replayed from a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddElement {
        element_type: ElementType,
        #[serde(default)]
        platform: Option<String>,
    },
    Select { id: ElementId },
    ClearSelection,
    UpdateProperty { id: ElementId, key: PropertyKey, value: String },
    Duplicate { id: ElementId },
    MoveLayer { id: ElementId, direction: LayerDirection },
    Delete { id: ElementId },
    Center { id: ElementId },
    MoveTo { id: ElementId, x: f64, y: f64 },
    ChartAddItem { id: ElementId },
    ChartRemoveItem { id: ElementId, index: usize },
    ChartSetValue { id: ElementId, index: usize, value: String },
    ChartSetLabel { id: ElementId, index: usize, label: String },
    ChartSetColor { id: ElementId, index: usize, color: String },
    ChartBalance { id: ElementId },
    SetCreatorName { name: String },
    SetGradientKind { kind: GradientKind },
    SetGradientDirection { direction: String },
    SetStopColor { index: usize, color: String },
    SetStopPosition { index: usize, position: i64 },
    TogglePreview,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    elements: Vec<Element>,
    selection: Selection,
    gradient: BackgroundGradient,
    creator_name: String,
    preview: bool,
    next_id: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&KitConfig::default())
    }
}

impl EditorState {
    pub fn new(config: &KitConfig) -> Self {
        EditorState {
            elements: Vec::new(),
            selection: Selection::NoSelection,
            gradient: config.gradient.clone(),
            creator_name: config.creator_name.clone(),
            preview: false,
            next_id: 1,
        }
    }

    /// Rebuild a state from stored parts; the id counter resumes after the
    /// largest id present.
    pub(crate) fn from_parts(
        creator_name: String,
        gradient: BackgroundGradient,
        elements: Vec<Element>,
    ) -> Self {
        let next_id = elements.iter().map(|e| e.id.0).max().map_or(1, |m| m + 1);
        EditorState {
            elements,
            selection: Selection::NoSelection,
            gradient,
            creator_name,
            preview: false,
            next_id,
        }
    }

    // --- inspection ---

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        match self.selection {
            Selection::Selected(id) => Some(id),
            Selection::NoSelection => None,
        }
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id().and_then(|id| self.find(id))
    }

    pub fn gradient(&self) -> &BackgroundGradient {
        &self.gradient
    }

    pub fn creator_name(&self) -> &str {
        &self.creator_name
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn canvas_height(&self) -> u32 {
        compute_canvas_height(&self.elements)
    }

    /// Elements in paint order: ascending z-index, ties kept in insertion order.
    pub fn paint_order(&self) -> Vec<&Element> {
        let mut v: Vec<&Element> = self.elements.iter().collect();
        v.sort_by_key(|e| e.z_index);
        v
    }

    // --- transitions ---

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::AddElement { element_type, platform } => {
                self.add_element(element_type, platform.as_deref())
            }
            Action::Select { id } => self.select(id),
            Action::ClearSelection => self.clear_selection(),
            Action::UpdateProperty { id, key, value } => self.update_property(id, key, &value),
            Action::Duplicate { id } => self.duplicate(id),
            Action::MoveLayer { id, direction } => self.move_layer(id, direction),
            Action::Delete { id } => self.delete(id),
            Action::Center { id } => self.center(id),
            Action::MoveTo { id, x, y } => self.move_to(id, x, y),
            Action::ChartAddItem { id } => self.chart_add_item(id),
            Action::ChartRemoveItem { id, index } => self.chart_remove_item(id, index),
            Action::ChartSetValue { id, index, value } => self.chart_set_value(id, index, &value),
            Action::ChartSetLabel { id, index, label } => self.chart_set_label(id, index, label),
            Action::ChartSetColor { id, index, color } => self.chart_set_color(id, index, color),
            Action::ChartBalance { id } => self.chart_balance(id),
            Action::SetCreatorName { name } => self.set_creator_name(name),
            Action::SetGradientKind { kind } => self.set_gradient_kind(kind),
            Action::SetGradientDirection { direction } => self.set_gradient_direction(direction),
            Action::SetStopColor { index, color } => self.set_stop_color(index, color),
            Action::SetStopPosition { index, position } => self.set_stop_position(index, position),
            Action::TogglePreview => self.toggle_preview(),
        }
    }

    fn alloc_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace element `id` with `f(old)`. No-op when the id is gone.
    fn map_element(mut self, id: ElementId, what: &str, f: impl FnOnce(&Element) -> Element) -> Self {
        match self.elements.iter().position(|e| e.id == id) {
            Some(pos) => {
                let next = f(&self.elements[pos]);
                self.elements[pos] = next;
            }
            None => debug!("{}: no element {}, ignoring", what, id),
        }
        self
    }

    /// Append a new element below everything else, centred, on top of the
    /// stack, and select it.
    pub fn add_element(mut self, ty: ElementType, platform: Option<&str>) -> Self {
        let id = self.alloc_id();
        let x = compute_initial_x(ty);
        let y = compute_next_y(&self.elements);
        let z = self.elements.len() as u32;
        let el = Element::new(id, ty, platform, x, y, z);
        debug!("add {} {} at ({}, {})", ty, id, x, y);
        self.elements.push(el);
        self.selection = Selection::Selected(id);
        self
    }

    pub fn select(mut self, id: ElementId) -> Self {
        if self.find(id).is_some() {
            self.selection = Selection::Selected(id);
        } else {
            debug!("select: no element {}, ignoring", id);
        }
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selection = Selection::NoSelection;
        self
    }

    /// Replace a single attribute with a coerced value, leaving every other
    /// attribute untouched.
    pub fn update_property(self, id: ElementId, key: PropertyKey, raw: &str) -> Self {
        self.map_element(id, "update_property", |old| {
            let mut el = old.clone();
            apply_property(&mut el, key, raw);
            el
        })
    }

    /// Clone `id` one grid step down-right, on top of the stack, and select it.
    pub fn duplicate(mut self, id: ElementId) -> Self {
        let Some(src) = self.find(id).cloned() else {
            debug!("duplicate: no element {}, ignoring", id);
            return self;
        };
        let new_id = self.alloc_id();
        let clone = Element {
            id: new_id,
            x: snap_to_grid((src.x + DUPLICATE_OFFSET) as f64),
            y: snap_to_grid((src.y + DUPLICATE_OFFSET) as f64),
            z_index: self.elements.len() as u32,
            ..src
        };
        debug!("duplicate {} -> {}", id, new_id);
        self.elements.push(clone);
        self.selection = Selection::Selected(new_id);
        self
    }

    /// Shift one z step. Other elements keep their z-index; ties resolve by
    /// insertion order at paint time.
    pub fn move_layer(self, id: ElementId, direction: LayerDirection) -> Self {
        self.map_element(id, "move_layer", |old| {
            let z_index = match direction {
                LayerDirection::Up => old.z_index.saturating_add(1),
                LayerDirection::Down => old.z_index.saturating_sub(1),
            };
            Element { z_index, ..old.clone() }
        })
    }

    pub fn delete(mut self, id: ElementId) -> Self {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.elements.len() == before {
            debug!("delete: no element {}, ignoring", id);
        } else {
            debug!("delete {}", id);
        }
        if self.selection == Selection::Selected(id) {
            self.selection = Selection::NoSelection;
        }
        self
    }

    pub fn center(self, id: ElementId) -> Self {
        self.map_element(id, "center", |old| Element { x: center_horizontally(old), ..old.clone() })
    }

    /// Move `id` towards `(x, y)`, clamped to the canvas and snapped.
    pub fn move_to(self, id: ElementId, x: f64, y: f64) -> Self {
        let canvas_height = self.canvas_height();
        self.map_element(id, "move_to", |old| {
            let (x, y) = clamp_drag(x, y, old.width, old.height, canvas_height);
            Element { x, y, ..old.clone() }
        })
    }

    fn map_chart(
        self,
        id: ElementId,
        what: &str,
        f: impl FnOnce(&mut String, &mut Vec<ChartItem>),
    ) -> Self {
        self.map_element(id, what, |old| {
            let mut el = old.clone();
            match &mut el.kind {
                ElementKind::Chart { title, items } => {
                    let rows_before = items.len();
                    f(title, items);
                    if items.len() != rows_before {
                        el.height = chart_height(items.len());
                    }
                }
                _ => debug!("{}: {} is not a chart, ignoring", what, id),
            }
            el
        })
    }

    pub fn chart_add_item(self, id: ElementId) -> Self {
        self.map_chart(id, "chart_add_item", |_, items| {
            let n = items.len();
            items.push(ChartItem::new(format!("Item {}", n + 1), 0, CHART_COLORS[n % CHART_COLORS.len()]));
        })
    }

    pub fn chart_remove_item(self, id: ElementId, index: usize) -> Self {
        self.map_chart(id, "chart_remove_item", |_, items| {
            if index < items.len() {
                items.remove(index);
            }
        })
    }

    /// Set a row value from raw input: non-numeric reads as 0, then clamp.
    pub fn chart_set_value(self, id: ElementId, index: usize, raw: &str) -> Self {
        let v = clamp_percent(parse_leading_int(raw).unwrap_or(0));
        self.map_chart(id, "chart_set_value", |_, items| {
            if let Some(item) = items.get_mut(index) {
                item.value = v;
            }
        })
    }

    pub fn chart_set_label(self, id: ElementId, index: usize, label: String) -> Self {
        self.map_chart(id, "chart_set_label", |_, items| {
            if let Some(item) = items.get_mut(index) {
                item.label = label;
            }
        })
    }

    pub fn chart_set_color(self, id: ElementId, index: usize, color: String) -> Self {
        self.map_chart(id, "chart_set_color", |_, items| {
            if let Some(item) = items.get_mut(index) {
                item.color = color;
            }
        })
    }

    /// Rescale rows to `round(value / total * 100)` each. The sum can land
    /// one off 100; that is left as is. No-op when the total is 0.
    pub fn chart_balance(self, id: ElementId) -> Self {
        self.map_chart(id, "chart_balance", |_, items| {
            let total: u32 = items.iter().map(|i| i.value as u32).sum();
            if total == 0 {
                return;
            }
            for item in items.iter_mut() {
                let scaled = (item.value as f64 / total as f64 * 100.0).round() as i64;
                item.value = clamp_percent(scaled);
            }
        })
    }

    pub fn set_creator_name(mut self, name: String) -> Self {
        self.creator_name = name;
        self
    }

    pub fn set_gradient(mut self, gradient: BackgroundGradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn set_gradient_kind(mut self, kind: GradientKind) -> Self {
        self.gradient.kind = kind;
        self
    }

    pub fn set_gradient_direction(mut self, direction: String) -> Self {
        self.gradient.direction = direction;
        self
    }

    pub fn set_stop_color(mut self, index: usize, color: String) -> Self {
        match self.gradient.stops.get_mut(index) {
            Some(stop) => stop.color = color,
            None => debug!("set_stop_color: no stop {}, ignoring", index),
        }
        self
    }

    pub fn set_stop_position(mut self, index: usize, position: i64) -> Self {
        match self.gradient.stops.get_mut(index) {
            Some(stop) => stop.position = clamp_percent(position),
            None => debug!("set_stop_position: no stop {}, ignoring", index),
        }
        self
    }

    pub fn toggle_preview(mut self) -> Self {
        self.preview = !self.preview;
        debug!("preview {}", if self.preview { "on" } else { "off" });
        self
    }
}

fn int_or(raw: &str, fallback: u32) -> u32 {
    parse_leading_int(raw).map_or(fallback, clamp_extent)
}

fn apply_property(el: &mut Element, key: PropertyKey, raw: &str) {
    let (ty, id) = (el.element_type(), el.id);
    let defaults = resolve_defaults(ty, el.platform());
    match key {
        PropertyKey::Label => el.label = raw.to_string(),
        PropertyKey::Value => el.value = raw.to_string(),
        PropertyKey::Color => el.color = raw.to_string(),
        PropertyKey::BackgroundColor => el.background_color = raw.to_string(),
        PropertyKey::BorderColor => el.border.color = raw.to_string(),
        PropertyKey::Url => match &mut el.kind {
            ElementKind::Social { url, .. } => *url = raw.to_string(),
            _ => debug!("url on {} {}, ignoring", ty, id),
        },
        PropertyKey::ChartTitle => match &mut el.kind {
            ElementKind::Chart { title, .. } => *title = raw.to_string(),
            _ => debug!("chartTitle on {} {}, ignoring", ty, id),
        },
        PropertyKey::X => {
            if let Some(v) = parse_leading_int(raw) {
                el.x = snap_to_grid(v as f64);
            }
        }
        PropertyKey::Y => {
            if let Some(v) = parse_leading_int(raw) {
                el.y = snap_to_grid(v as f64);
            }
        }
        PropertyKey::FontSize => el.font_size = int_or(raw, defaults.font_size),
        PropertyKey::BorderRadius => el.border_radius = int_or(raw, defaults.border_radius),
        PropertyKey::BorderWidth => el.border.width = int_or(raw, defaults.border.width),
        PropertyKey::Padding => el.padding = int_or(raw, defaults.padding),
        PropertyKey::Width => el.width = int_or(raw, default_width(ty)),
        PropertyKey::Height => {
            let fallback = match &el.kind {
                ElementKind::Chart { items, .. } => chart_height(items.len()),
                _ => defaults.height,
            };
            el.height = int_or(raw, fallback);
        }
        PropertyKey::FontWeight => match FontWeight::parse(raw) {
            Some(w) => el.font_weight = w,
            None => debug!("unknown font weight {:?}, ignoring", raw),
        },
        PropertyKey::HasBorder => el.border.enabled = parse_flag(raw),
        PropertyKey::Shadow => el.shadow = parse_flag(raw),
    }
}
