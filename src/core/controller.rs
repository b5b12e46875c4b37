/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
}

/// Raw input surface consumed by the camera.
///
/// The host's event loop produces these (see `WinitAdapter`) and feeds
/// them to `Camera::handle_event` between control cycles. Pointer
/// coordinates are normalized to [-1, 1] on both axes with Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Pointer moved to a normalized position.
    PointerMoved { x: f32, y: f32 },
    /// Pointer button went down.
    ButtonPressed(PointerButton),
    /// Pointer button came back up.
    ButtonReleased(PointerButton),
    /// Scroll wheel turned; `delta` is the dolly distance.
    Wheel { delta: f32 },
    /// The reset key ("r") was pressed.
    ResetKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(PointerButton::Left, PointerButton::Left);
        assert_ne!(PointerButton::Left, PointerButton::Right);
    }

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(PointerButton::Left);
        set.insert(PointerButton::Left);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_event_copy() {
        let ev = CameraEvent::Wheel { delta: 2.0 };
        let copy = ev;
        assert_eq!(ev, copy);
    }
}
