//! Built-in starting layouts.

use crate::element::ElementType;
use crate::gradient::BackgroundGradient;
use crate::state::{EditorState, PropertyKey};
use crate::{Error, KitConfig, Result};

/// One element of a template, with the attributes it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateElement {
    pub element_type: ElementType,
    pub platform: Option<&'static str>,
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub background_color: &'static str,
    pub elements: &'static [TemplateElement],
}

const fn text(label: &'static str, value: &'static str, color: &'static str) -> TemplateElement {
    TemplateElement { element_type: ElementType::Text, platform: None, label, value, color }
}

const fn social(
    platform: &'static str,
    label: &'static str,
    value: &'static str,
    color: &'static str,
) -> TemplateElement {
    TemplateElement { element_type: ElementType::Social, platform: Some(platform), label, value, color }
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "Professional Dark",
        description: "Clean professional template with dark theme",
        background_color: "#0a0a0a",
        elements: &[
            text("Creator Name", "Your Name Here", "#ffffff"),
            text("Subtitle", "Content Creator", "#cccccc"),
            social("instagram", "Instagram", "@username", "#E4405F"),
            social("youtube", "YouTube", "Channel Name", "#FF0000"),
        ],
    },
    Template {
        name: "Gaming Streamer",
        description: "Perfect for gaming content creators",
        background_color: "#1a1a2e",
        elements: &[],
    },
    Template {
        name: "Lifestyle Influencer",
        description: "Bright and engaging for lifestyle content",
        background_color: "#2d1b69",
        elements: &[],
    },
    Template {
        name: "Minimalist",
        description: "Clean and simple design",
        background_color: "#ffffff",
        elements: &[],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownTemplate(name.to_string()))
}

impl Template {
    /// Fresh state laid out through the normal add flow, with this
    /// template's overrides applied and the background painted flat.
    pub fn instantiate(&self, config: &KitConfig) -> EditorState {
        let mut state = EditorState::new(config);
        state = state.set_gradient(BackgroundGradient::solid(self.background_color));
        for te in self.elements {
            state = state.add_element(te.element_type, te.platform);
            let Some(id) = state.selected_id() else { continue };
            state = state
                .update_property(id, PropertyKey::Label, te.label)
                .update_property(id, PropertyKey::Value, te.value)
                .update_property(id, PropertyKey::Color, te.color);
        }
        state.clear_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::CANVAS_WIDTH;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("minimalist").unwrap().background_color, "#ffffff");
        assert!(matches!(find("Retro"), Err(Error::UnknownTemplate(_))));
    }

    #[test]
    fn professional_dark_stacks_its_elements() {
        let s = find("Professional Dark").unwrap().instantiate(&KitConfig::default());
        let els = s.elements();
        assert_eq!(els.len(), 4);
        assert_eq!(els[0].value, "Your Name Here");
        assert_eq!(els[3].platform(), Some("youtube"));
        assert_eq!(els[3].color, "#FF0000");
        for pair in els.windows(2) {
            assert!(pair[1].y as i64 >= pair[0].bottom());
        }
        for el in els {
            assert!(el.x >= 0 && el.x as u32 + el.width <= CANVAS_WIDTH);
        }
        assert_eq!(s.selected_id(), None);
    }

    #[test]
    fn background_paints_both_stops() {
        let s = find("Gaming Streamer").unwrap().instantiate(&KitConfig::default());
        assert!(s.elements().is_empty());
        assert!(s.gradient().stops.iter().all(|c| c.color == "#1a1a2e"));
    }
}
