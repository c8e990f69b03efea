//! Interaction controller: pointer and keyboard events in, editor
//! transitions out.
//!
//! The controller owns the [`EditorState`] plus the one piece of
//! multi-step state the editor has, the drag. Everything else is
//! delegated to the pure transitions on the state.

use log::{debug, trace};
use serde::Deserialize;

use crate::element::ElementId;
use crate::state::{Action, EditorState};
use crate::KitConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `offset` is pointer position minus element origin at grab time
    Dragging { id: ElementId, offset_x: f64, offset_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    #[serde(other)]
    Other,
}

/// Raw input, in canvas coordinates. `target` is the element under the
/// pointer, `None` for empty canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        #[serde(default)]
        target: Option<ElementId>,
        x: f64,
        y: f64,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    TouchStart {
        #[serde(default)]
        target: Option<ElementId>,
        x: f64,
        y: f64,
    },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
    KeyDown { key: Key },
}

#[derive(Debug, Clone)]
pub struct Controller {
    state: EditorState,
    drag: DragState,
    backspace_deletes: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&KitConfig::default())
    }
}

impl Controller {
    pub fn new(config: &KitConfig) -> Self {
        Self::with_state(EditorState::new(config), config)
    }

    pub fn with_state(state: EditorState, config: &KitConfig) -> Self {
        Controller { state, drag: DragState::Idle, backspace_deletes: config.backspace_deletes }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Apply a transition directly (toolbar buttons, property panel).
    pub fn dispatch(&mut self, action: Action) {
        let entering_preview = matches!(action, Action::TogglePreview) && !self.state.is_preview();
        if entering_preview && self.is_dragging() {
            debug!("preview on, dropping drag");
            self.drag = DragState::Idle;
        }
        self.transition(|s| s.apply(action));
    }

    fn transition(&mut self, f: impl FnOnce(EditorState) -> EditorState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { target, x, y } | InputEvent::TouchStart { target, x, y } => {
                self.press(target, x, y)
            }
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => self.motion(x, y),
            InputEvent::PointerUp | InputEvent::TouchEnd => self.release(),
            InputEvent::KeyDown { key } => self.key(key),
        }
    }

    fn press(&mut self, target: Option<ElementId>, x: f64, y: f64) {
        if self.state.is_preview() {
            return;
        }
        if self.is_dragging() {
            // The matching release never arrived.
            debug!("stale drag on new press, resetting");
            self.drag = DragState::Idle;
        }
        let origin = target.and_then(|id| self.state.find(id)).map(|el| (el.id, el.x, el.y));
        match origin {
            Some((id, ex, ey)) => {
                self.transition(|s| s.select(id));
                self.drag = DragState::Dragging { id, offset_x: x - ex as f64, offset_y: y - ey as f64 };
                debug!("drag start {}", id);
            }
            None => self.transition(EditorState::clear_selection),
        }
    }

    fn motion(&mut self, x: f64, y: f64) {
        let DragState::Dragging { id, offset_x, offset_y } = self.drag else {
            return;
        };
        if self.state.is_preview() || self.state.find(id).is_none() {
            self.drag = DragState::Idle;
            return;
        }
        trace!("drag {} to ({}, {})", id, x - offset_x, y - offset_y);
        self.transition(|s| s.move_to(id, x - offset_x, y - offset_y));
    }

    fn release(&mut self) {
        if let DragState::Dragging { id, .. } = self.drag {
            debug!("drag end {}", id);
        }
        self.drag = DragState::Idle;
    }

    fn key(&mut self, key: Key) {
        if self.state.is_preview() {
            return;
        }
        let Some(id) = self.state.selected_id() else {
            return;
        };
        match key {
            Key::Delete => self.delete_selected(id),
            Key::Backspace if self.backspace_deletes => self.delete_selected(id),
            Key::Escape => self.transition(EditorState::clear_selection),
            _ => {}
        }
    }

    fn delete_selected(&mut self, id: ElementId) {
        if matches!(self.drag, DragState::Dragging { id: d, .. } if d == id) {
            self.drag = DragState::Idle;
        }
        self.transition(|s| s.delete(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;
    use crate::state::Selection;

    fn with_social() -> (Controller, ElementId) {
        let mut c = Controller::default();
        c.dispatch(Action::AddElement { element_type: ElementType::Social, platform: Some("youtube".into()) });
        let id = c.state().elements()[0].id;
        (c, id)
    }

    #[test]
    fn drag_moves_by_pointer_delta_and_clamps() {
        let (mut c, id) = with_social();
        // element sits at (60, 100); grab it 10px in
        c.handle(InputEvent::PointerDown { target: Some(id), x: 70.0, y: 110.0 });
        c.handle(InputEvent::PointerMove { x: 83.0, y: 151.0 });
        assert_eq!((c.state().elements()[0].x, c.state().elements()[0].y), (75, 140));
        c.handle(InputEvent::PointerMove { x: 510.0, y: 20.0 });
        assert_eq!((c.state().elements()[0].x, c.state().elements()[0].y), (120, 10));
        c.handle(InputEvent::PointerUp);
        assert_eq!(c.drag(), DragState::Idle);
        c.handle(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        assert_eq!(c.state().elements()[0].x, 120);
    }

    #[test]
    fn touch_drives_the_same_machine() {
        let (mut c, id) = with_social();
        c.handle(InputEvent::TouchStart { target: Some(id), x: 60.0, y: 100.0 });
        c.handle(InputEvent::TouchMove { x: 0.0, y: 300.0 });
        c.handle(InputEvent::TouchEnd);
        assert_eq!((c.state().elements()[0].x, c.state().elements()[0].y), (0, 300));
        assert!(!c.is_dragging());
    }

    #[test]
    fn empty_canvas_click_clears_selection() {
        let (mut c, _) = with_social();
        c.handle(InputEvent::PointerDown { target: None, x: 5.0, y: 5.0 });
        assert_eq!(c.state().selection(), Selection::NoSelection);
        assert!(!c.is_dragging());
    }

    #[test]
    fn preview_ignores_pointer() {
        let (mut c, id) = with_social();
        c.dispatch(Action::TogglePreview);
        c.handle(InputEvent::PointerDown { target: None, x: 0.0, y: 0.0 });
        assert_eq!(c.state().selected_id(), Some(id));
        c.handle(InputEvent::PointerDown { target: Some(id), x: 60.0, y: 100.0 });
        assert!(!c.is_dragging());
    }

    #[test]
    fn entering_preview_drops_drag() {
        let (mut c, id) = with_social();
        c.handle(InputEvent::PointerDown { target: Some(id), x: 60.0, y: 100.0 });
        c.dispatch(Action::TogglePreview);
        assert_eq!(c.drag(), DragState::Idle);
    }

    #[test]
    fn keys_need_selection_and_edit_mode() {
        let (mut c, id) = with_social();
        c.dispatch(Action::TogglePreview);
        c.handle(InputEvent::KeyDown { key: Key::Delete });
        assert!(c.state().find(id).is_some());
        c.dispatch(Action::TogglePreview);
        c.handle(InputEvent::KeyDown { key: Key::Escape });
        assert_eq!(c.state().selection(), Selection::NoSelection);
        c.handle(InputEvent::KeyDown { key: Key::Delete });
        assert!(c.state().find(id).is_some());
        c.dispatch(Action::Select { id });
        c.handle(InputEvent::KeyDown { key: Key::Delete });
        assert!(c.state().elements().is_empty());
        assert_eq!(c.state().selection(), Selection::NoSelection);
    }

    #[test]
    fn backspace_is_opt_in() {
        let (mut c, id) = with_social();
        c.handle(InputEvent::KeyDown { key: Key::Backspace });
        assert!(c.state().find(id).is_some());

        let config = KitConfig { backspace_deletes: true, ..KitConfig::default() };
        let mut c = Controller::with_state(c.into_state(), &config);
        c.handle(InputEvent::KeyDown { key: Key::Backspace });
        assert!(c.state().find(id).is_none());
    }

    #[test]
    fn press_without_release_does_not_leak_the_old_drag() {
        let mut c = Controller::default();
        c.dispatch(Action::AddElement { element_type: ElementType::Text, platform: None });
        c.dispatch(Action::AddElement { element_type: ElementType::Metric, platform: None });
        let (a, b) = (c.state().elements()[0].id, c.state().elements()[1].id);
        let a_before = (c.state().elements()[0].x, c.state().elements()[0].y);

        c.handle(InputEvent::PointerDown { target: Some(a), x: 150.0, y: 100.0 });
        // release lost; next press lands on b at its origin (150, 230)
        c.handle(InputEvent::PointerDown { target: Some(b), x: 150.0, y: 230.0 });
        assert!(matches!(c.drag(), DragState::Dragging { id, .. } if id == b));
        c.handle(InputEvent::PointerMove { x: 40.0, y: 300.0 });

        let a_el = c.state().find(a).unwrap();
        let b_el = c.state().find(b).unwrap();
        assert_eq!((a_el.x, a_el.y), a_before);
        assert_eq!((b_el.x, b_el.y), (40, 300));
        assert_eq!(c.state().selected_id(), Some(b));
    }

    #[test]
    fn drag_of_deleted_element_goes_idle() {
        let (mut c, id) = with_social();
        c.handle(InputEvent::PointerDown { target: Some(id), x: 60.0, y: 100.0 });
        c.dispatch(Action::Delete { id });
        c.handle(InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert_eq!(c.drag(), DragState::Idle);
    }

    #[test]
    fn events_deserialize() {
        let e: InputEvent = serde_json::from_str(r#"{"event":"pointer_down","target":1,"x":3,"y":4.5}"#).unwrap();
        assert_eq!(e, InputEvent::PointerDown { target: Some(ElementId(1)), x: 3.0, y: 4.5 });
        let e: InputEvent = serde_json::from_str(r#"{"event":"key_down","key":"Tab"}"#).unwrap();
        assert_eq!(e, InputEvent::KeyDown { key: Key::Other });
    }
}
