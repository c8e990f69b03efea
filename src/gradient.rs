//! Process-wide background gradient

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    /// Percentage in `[0, 100]`
    pub position: u8,
}

/// Background painted behind the canvas (and the exported page body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundGradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// CSS angle, only used by linear gradients
    pub direction: String,
    #[serde(rename = "colors")]
    pub stops: Vec<ColorStop>,
}

impl Default for BackgroundGradient {
    fn default() -> Self {
        BackgroundGradient {
            kind: GradientKind::Linear,
            direction: "135deg".to_string(),
            stops: vec![
                ColorStop { color: "#2d2d2d".to_string(), position: 0 },
                ColorStop { color: "#181819".to_string(), position: 100 },
            ],
        }
    }
}

impl BackgroundGradient {
    /// Two stops of the same colour: a flat background.
    pub fn solid(color: &str) -> Self {
        BackgroundGradient {
            stops: vec![
                ColorStop { color: color.to_string(), position: 0 },
                ColorStop { color: color.to_string(), position: 100 },
            ],
            ..Default::default()
        }
    }

    /// CSS `background` value.
    pub fn css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, s.position))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
            GradientKind::Linear => format!("linear-gradient({}, {})", self.direction, stops),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_css() {
        assert_eq!(
            BackgroundGradient::default().css(),
            "linear-gradient(135deg, #2d2d2d 0%, #181819 100%)"
        );
    }

    #[test]
    fn radial_ignores_direction() {
        let g = BackgroundGradient { kind: GradientKind::Radial, direction: "90deg".into(), ..Default::default() };
        assert_eq!(g.css(), "radial-gradient(circle, #2d2d2d 0%, #181819 100%)");
    }

    #[test]
    fn supports_more_than_two_stops() {
        let mut g = BackgroundGradient::default();
        g.stops.insert(1, ColorStop { color: "#7822ff".into(), position: 50 });
        assert_eq!(g.css(), "linear-gradient(135deg, #2d2d2d 0%, #7822ff 50%, #181819 100%)");
    }

    #[test]
    fn serializes_with_original_field_names() {
        let json = serde_json::to_value(BackgroundGradient::default()).unwrap();
        assert_eq!(json["type"], "linear");
        assert_eq!(json["colors"][1]["position"], 100);
    }
}
