//! Key-combo tracking and resolution of viewport input into edit actions.

use curve_math::Point2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    LeftShift,
    RightShift,
    LeftControl,
    LeftAlt,
    A,
    D,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A raw viewport event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseDown { button: MouseButton, cursor: Point2 },
}

/// What the editor should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditAction {
    /// Place a new control point under the cursor (Shift + A + left click).
    AddPointAtCursor(Point2),
}

/// Keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    held: Vec<KeyCode>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.retain(|&k| k != key);
    }

    /// True when at least one key is held and every key in `combo` is held.
    pub fn is_match(&self, combo: &[KeyCode]) -> bool {
        !self.held.is_empty() && combo.iter().all(|key| self.held.contains(key))
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

const ADD_POINT_COMBO: [KeyCode; 2] = [KeyCode::LeftShift, KeyCode::A];

/// Fold `event` into `keys` and map it to an edit action, if it triggers one.
pub fn resolve_input(keys: &mut KeyMap, event: &InputEvent) -> Option<EditAction> {
    match *event {
        InputEvent::KeyDown(key) => {
            keys.press(key);
            None
        }
        InputEvent::KeyUp(key) => {
            keys.release(key);
            None
        }
        InputEvent::MouseDown { button, cursor } => {
            (button == MouseButton::Left && keys.is_match(&ADD_POINT_COMBO))
                .then_some(EditAction::AddPointAtCursor(cursor))
        }
    }
}
