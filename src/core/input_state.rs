use glam::Vec2;

use super::controller::{CameraEvent, PointerButton};

/// Per-frame input accumulator for the camera.
///
/// Event delivery only writes accumulators; the control cycle reads and
/// resets them through the `take_*`/`consume_*` methods. One transition
/// rule per event type: pointer moves and wheel deltas overwrite (last
/// value wins), left presses and the reset key latch until consumed,
/// the right button is a held flag that follows button state. Left
/// releases are ignored; the click fires when the latch is consumed.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    wheel: f32,
    reset_pending: bool,
    left_pending: bool,
    right_held: bool,
    pointer: Vec2,
    last_pointer: Vec2,
}

impl InputState {
    /// Create an input state with all accumulators zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw event to the accumulators.
    pub fn apply(&mut self, event: CameraEvent) {
        match event {
            CameraEvent::PointerMoved { x, y } => self.pointer = Vec2::new(x, y),
            CameraEvent::ButtonPressed(PointerButton::Left) => self.left_pending = true,
            CameraEvent::ButtonPressed(PointerButton::Right) => self.right_held = true,
            CameraEvent::ButtonReleased(PointerButton::Right) => self.right_held = false,
            CameraEvent::ButtonReleased(PointerButton::Left) => {}
            CameraEvent::Wheel { delta } => self.wheel = delta,
            CameraEvent::ResetKey => self.reset_pending = true,
        }
    }

    /// Consume the pending wheel delta, leaving zero behind.
    pub fn take_wheel(&mut self) -> f32 {
        std::mem::take(&mut self.wheel)
    }

    /// Consume the reset latch.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }

    /// Consume the left-click latch.
    pub fn take_left_click(&mut self) -> bool {
        std::mem::take(&mut self.left_pending)
    }

    /// Whether the right button is currently held.
    pub fn right_held(&self) -> bool {
        self.right_held
    }

    /// Pointer movement since the previous cycle, advancing the
    /// previous-position marker. Zero when no new pointer event arrived.
    pub fn consume_movement(&mut self) -> Vec2 {
        let movement = self.pointer - self.last_pointer;
        self.last_pointer = self.pointer;
        movement
    }

    /// Current normalized pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_overwrites_not_sums() {
        let mut state = InputState::new();
        state.apply(CameraEvent::Wheel { delta: 3.0 });
        state.apply(CameraEvent::Wheel { delta: -1.0 });
        assert_eq!(state.take_wheel(), -1.0);
        assert_eq!(state.take_wheel(), 0.0);
    }

    #[test]
    fn reset_latches_until_consumed() {
        let mut state = InputState::new();
        assert!(!state.take_reset());
        state.apply(CameraEvent::ResetKey);
        state.apply(CameraEvent::ResetKey);
        assert!(state.take_reset());
        assert!(!state.take_reset());
    }

    #[test]
    fn left_click_is_single_shot() {
        let mut state = InputState::new();
        state.apply(CameraEvent::ButtonPressed(PointerButton::Left));
        assert!(state.take_left_click());
        assert!(!state.take_left_click());
    }

    #[test]
    fn left_release_is_ignored() {
        let mut state = InputState::new();
        state.apply(CameraEvent::ButtonPressed(PointerButton::Left));
        state.apply(CameraEvent::ButtonReleased(PointerButton::Left));
        assert!(state.take_left_click());
    }

    #[test]
    fn right_follows_button_state() {
        let mut state = InputState::new();
        assert!(!state.right_held());
        state.apply(CameraEvent::ButtonPressed(PointerButton::Right));
        assert!(state.right_held());
        state.apply(CameraEvent::ButtonReleased(PointerButton::Right));
        assert!(!state.right_held());
    }

    #[test]
    fn movement_coalesces_to_last_position() {
        let mut state = InputState::new();
        state.apply(CameraEvent::PointerMoved { x: 0.1, y: 0.1 });
        state.apply(CameraEvent::PointerMoved { x: 0.5, y: -0.5 });
        assert_eq!(state.consume_movement(), Vec2::new(0.5, -0.5));
        // No new events: movement is zero on the next cycle.
        assert_eq!(state.consume_movement(), Vec2::ZERO);
    }

    #[test]
    fn movement_is_relative_to_previous_cycle() {
        let mut state = InputState::new();
        state.apply(CameraEvent::PointerMoved { x: 0.2, y: 0.0 });
        let _ = state.consume_movement();
        state.apply(CameraEvent::PointerMoved { x: 0.6, y: 0.3 });
        let movement = state.consume_movement();
        assert!((movement.x - 0.4).abs() < 1e-6);
        assert!((movement.y - 0.3).abs() < 1e-6);
    }
}
