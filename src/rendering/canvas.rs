//! Live editor surface

use crate::platform::IconRegistry;
use crate::rendering::escape_html;
use crate::rendering::layout::CANVAS_WIDTH;
use crate::rendering::style::{resolve, RenderMode};
use crate::state::EditorState;
use crate::Attribution;

/// Dot pattern drawn over the background while editing, one dot per grid cell.
pub const GRID_OVERLAY: &str =
    "radial-gradient(circle at 1px 1px, rgba(255,255,255,0.1) 1px, transparent 0)";

/// Editor canvas markup: pixel placement, grid overlay and selection ring
/// while editing, plain background and live links in preview. The
/// attribution footer sits at the bottom in both modes, as in the export.
pub fn render_canvas(
    state: &EditorState,
    attribution: &Attribution,
    icons: &dyn IconRegistry,
) -> String {
    let preview = state.is_preview();
    let background = if preview {
        state.gradient().css()
    } else {
        format!("{}, {}", GRID_OVERLAY, state.gradient().css())
    };
    let size = if preview { String::new() } else { " background-size: 5px 5px, auto;".to_string() };
    let mode_class = if preview { "preview" } else { "editing" };

    let mut out = format!(
        r#"<div class="canvas {}" style="position: relative; width: {}px; height: {}px; overflow: hidden; background: {};{}">"#,
        mode_class,
        CANVAS_WIDTH,
        state.canvas_height(),
        background,
        size
    );
    let selected = state.selected_id();
    for el in state.paint_order() {
        let mode = RenderMode::Editor { preview, selected: selected == Some(el.id) };
        out.push_str(&resolve(el, mode, icons).to_html());
    }
    out.push_str(&footer_html(attribution));
    out.push_str("</div>");
    out
}

fn footer_html(attribution: &Attribution) -> String {
    format!(
        concat!(
            r#"<div class="footer" style="position: absolute; bottom: 16px; left: 50%; transform: translateX(-50%); color: rgba(255, 255, 255, 0.6); font-size: 12px; font-weight: 500;">"#,
            r#"<a href="{link}" target="_blank" rel="noopener noreferrer" style="color: inherit; text-decoration: none; display: flex; align-items: center; gap: 8px;">"#,
            r#"<img src="{logo}" alt="{alt}" style="width: 16px; height: 16px; object-fit: contain;" />{text}</a></div>"#
        ),
        link = escape_html(&attribution.link),
        logo = escape_html(&attribution.logo_url),
        alt = escape_html(&attribution.logo_alt),
        text = escape_html(&attribution.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;
    use crate::platform::BuiltinIcons;

    #[test]
    fn editing_shows_grid_and_selection() {
        let s = EditorState::default().add_element(ElementType::Social, Some("x"));
        let html = render_canvas(&s, &Attribution::default(), &BuiltinIcons::new());
        assert!(html.contains(GRID_OVERLAY));
        assert!(html.contains("background-size: 5px 5px"));
        assert!(html.contains(r#"class="canvas-element selected""#));
        assert!(!html.contains(r#"href="https://example.com""#));
        assert!(html.contains("left: 60px;"));
    }

    #[test]
    fn footer_shows_in_both_modes() {
        let s = EditorState::default();
        let attribution = Attribution::default();
        for state in [s.clone(), s.toggle_preview()] {
            let html = render_canvas(&state, &attribution, &BuiltinIcons::new());
            assert!(html.contains(r#"<a href="https://trueconext.com/""#));
            assert!(html.contains("Powered by TrueConext</a></div></div>"));
        }
    }

    #[test]
    fn preview_is_plain_and_live() {
        let s = EditorState::default().add_element(ElementType::Social, Some("x")).toggle_preview();
        let html = render_canvas(&s, &Attribution::default(), &BuiltinIcons::new());
        assert!(!html.contains(GRID_OVERLAY));
        assert!(!html.contains("selected"));
        assert!(html.contains(r#"href="https://example.com""#));
    }
}
