use crate::input::controls::ControlField;
use crate::input::gamepad::GamepadSnapshot;
use crate::input::keyboard::KeyCode;
use crate::input::touch::DeviceProfile;

/// Mouse button / pointer kind, numbered like DOM `PointerEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u32),
}

impl PointerButton {
    pub fn from_dom(button: u32) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Input event types the engine understands.
/// Pointer coordinates are CSS pixels relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, x: f32, y: f32 },
    PointerUp { button: PointerButton, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Pointer left the canvas or was cancelled (touch lift, lost capture).
    PointerLeave,
    /// Wheel scroll; positive = away from the user (zoom out).
    Wheel { delta_y: f32 },
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    /// One timer-driven sample of a connected gamepad.
    GamepadPoll { index: u32, snapshot: GamepadSnapshot },
    GamepadDisconnected { index: u32 },
    /// On-screen control pressed or released.
    VirtualButton { field: ControlField, pressed: bool },
    /// Device capabilities changed (resize, media query flip).
    DeviceProfile(DeviceProfile),
    /// A custom event from the UI layer (overlay buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host writes events between frames; the game reads them on the next tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { button: PointerButton::Primary, x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key: KeyCode::Space });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn dom_button_numbers() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let events = q.drain();
        match events[0] {
            InputEvent::Custom { kind, a, b, c } => {
                assert_eq!(kind, 7);
                assert_eq!((a, b, c), (1.5, 2.5, 3.5));
            }
            _ => panic!("Expected Custom event"),
        }
    }
}
