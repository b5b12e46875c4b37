use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{CameraEvent, PointerButton};

/// Dolly distance per scroll-wheel line.
pub const WHEEL_LINE_STEP: f32 = 2.0;
/// Dolly distance per scroll-wheel pixel (touchpads report pixels).
const WHEEL_PIXEL_STEP: f32 = 0.02;

/// Adapter that bridges winit window events to camera events.
///
/// Owns the viewport dimensions so cursor positions can be converted
/// from physical pixels to the normalized [-1, 1] range the camera
/// works in (Y inverted so it points up).
#[derive(Debug, Clone)]
pub struct WinitAdapter {
    width: f32,
    height: f32,
}

impl WinitAdapter {
    /// Create an adapter for the given viewport size in physical pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Track a viewport resize so later cursor events normalize correctly.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Convert a winit event into a camera event, if it maps to one.
    pub fn map(&self, event: &WindowEvent) -> Option<CameraEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.normalize(position.x as f32, position.y as f32);
                Some(CameraEvent::PointerMoved { x, y })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::map_button(*button)?;
                Some(match state {
                    ElementState::Pressed => CameraEvent::ButtonPressed(button),
                    ElementState::Released => CameraEvent::ButtonReleased(button),
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(CameraEvent::Wheel {
                delta: Self::map_wheel(*delta),
            }),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyR)
                {
                    Some(CameraEvent::ResetKey)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Pixel coordinates (origin top-left) to [-1, 1] with Y up.
    fn normalize(&self, x: f32, y: f32) -> (f32, f32) {
        let nx = (x * 2.0) / self.width - 1.0;
        let ny = -((y * 2.0) / self.height - 1.0);
        (nx, ny)
    }

    fn map_button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Left),
            MouseButton::Right => Some(PointerButton::Right),
            _ => None,
        }
    }

    /// Scroll-up dollies in, matching the distance units the control
    /// cycle translates by.
    fn map_wheel(delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_STEP,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32 * WHEEL_PIXEL_STEP,
        }
    }
}
