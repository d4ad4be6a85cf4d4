//! Translation of winit window events into viewport events and editor shortcuts.

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState};

use crate::editor::EditorAction;
use crate::viewport::{PointerButton, ViewportEvent};

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

impl ViewportEvent {
    /// Translates a winit event. `cursor` is the last known pointer position,
    /// since winit button events carry none.
    pub fn from_window_event(event: &WindowEvent, cursor: (f64, f64)) -> Option<Self> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::from_mouse_input(*state, *button, cursor))
            }
            WindowEvent::CursorMoved { position, .. } => Some(ViewportEvent::Moved {
                x: position.x,
                y: position.y,
            }),
            WindowEvent::MouseWheel { delta, .. } => Some(Self::from_wheel(*delta)),
            _ => None,
        }
    }

    fn from_mouse_input(state: ElementState, button: MouseButton, cursor: (f64, f64)) -> Self {
        let button = PointerButton::from(button);
        match state {
            ElementState::Pressed => ViewportEvent::Pressed {
                button,
                x: cursor.0,
                y: cursor.1,
            },
            ElementState::Released => ViewportEvent::Released { button },
        }
    }

    // winit and the viewport agree on sign: positive is away from the user.
    fn from_wheel(delta: MouseScrollDelta) -> Self {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };
        ViewportEvent::Scrolled { delta_y }
    }
}

/// Keyboard shortcut table.
pub(super) fn shortcut(key: KeyCode, modifiers: ModifiersState) -> Option<EditorAction> {
    let command = modifiers.control_key() || modifiers.super_key();
    match (key, command) {
        (KeyCode::KeyN, true) => Some(EditorAction::NewProject),
        (KeyCode::KeyZ, true) => Some(EditorAction::Undo),
        (KeyCode::KeyY, true) => Some(EditorAction::Redo),
        (KeyCode::KeyR, false) => Some(EditorAction::ResetCamera),
        (KeyCode::F5, _) => Some(EditorAction::Render),
        (KeyCode::Escape, _) => Some(EditorAction::Exit),
        _ => None,
    }
}
