use glam::{Mat4, Vec2, Vec3};
use thiserror::Error;

use crate::core::{CameraEvent, InputState, MatrixSlot};
use crate::math::{axis_rotation, identity, rotation_x, translation};

// === Constants ===

/// Vertical field of view, radians.
pub const FIELD_OF_VIEW: f32 = 45.0 * std::f32::consts::PI / 180.0;
/// Near clipping plane distance.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane distance.
pub const FAR_PLANE: f32 = 100.0;

/// Normalized pointer units per radian of orbit rotation.
pub const ORBIT_SENSITIVITY: f32 = 500.0;

/// Default reset tilt about the world X axis, radians.
pub const RESET_TILT: f32 = 0.4;
/// Default reset eye offset.
pub const RESET_OFFSET: Vec3 = Vec3::new(0.0, -25.0, -35.0);

/// Fixed frame-start clear color (pale blue).
pub const CLEAR_COLOR: [f64; 4] = [0.6, 0.6, 0.9, 1.0];
/// Fixed frame-start depth clear value; depth test is nearer-wins.
pub const CLEAR_DEPTH: f32 = 1.0;

/// Callback invoked with the normalized (x, y) of a left click.
pub type ClickCallback = Box<dyn FnMut(f32, f32)>;

/// Errors from the camera control contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CameraError {
    /// `control` was called before `init_controls`.
    #[error("camera controls have not been initialized")]
    ControlsNotInitialized,
    /// `init_controls` was called while controls were already active.
    #[error("camera controls are already active")]
    ControlsAlreadyActive,
}

/// Viewport dimensions in pixels. Both must be positive; a zero height
/// divides by zero in the aspect ratio (caller contract).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Control-phase state, present only after `init_controls`.
struct Controls {
    input: InputState,
    callbacks: Vec<ClickCallback>,
}

/// First-person/orbit camera bound to two shader-uniform slots.
///
/// Owns the view and projection matrices. The projection is computed at
/// construction from the viewport and uploaded once; the view matrix is
/// mutated only inside `control` and pushed with `upload_view` each
/// render cycle.
pub struct Camera {
    view: Mat4,
    projection: Mat4,
    viewport: Viewport,
    view_slot: Box<dyn MatrixSlot>,
    projection_slot: Box<dyn MatrixSlot>,
    controls: Option<Controls>,
}

impl Camera {
    /// Bind a camera to its view and projection uniform slots.
    ///
    /// The projection matrix is derived from the viewport with the fixed
    /// field of view and clip planes, and uploaded immediately.
    pub fn new(
        view_slot: Box<dyn MatrixSlot>,
        mut projection_slot: Box<dyn MatrixSlot>,
        viewport: Viewport,
    ) -> Self {
        let projection =
            Mat4::perspective_rh(FIELD_OF_VIEW, viewport.aspect(), NEAR_PLANE, FAR_PLANE);
        projection_slot.set(projection.to_cols_array_2d());

        Self {
            view: identity(),
            projection,
            viewport,
            view_slot,
            projection_slot,
            controls: None,
        }
    }

    /// Recompute the projection for a new viewport and re-upload it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.projection =
            Mat4::perspective_rh(FIELD_OF_VIEW, viewport.aspect(), NEAR_PLANE, FAR_PLANE);
        self.projection_slot.set(self.projection.to_cols_array_2d());
    }

    /// Activate the control state machine with zeroed accumulators and
    /// register the click callbacks.
    ///
    /// Fails if controls are already active; deactivate first with
    /// `teardown_controls`.
    pub fn init_controls<I>(&mut self, callbacks: I) -> Result<(), CameraError>
    where
        I: IntoIterator<Item = ClickCallback>,
    {
        if self.controls.is_some() {
            return Err(CameraError::ControlsAlreadyActive);
        }
        self.controls = Some(Controls {
            input: InputState::new(),
            callbacks: callbacks.into_iter().collect(),
        });
        Ok(())
    }

    /// Deactivate controls, dropping pending input and callbacks.
    pub fn teardown_controls(&mut self) {
        self.controls = None;
    }

    /// Whether `init_controls` has been called.
    pub fn controls_active(&self) -> bool {
        self.controls.is_some()
    }

    /// Feed one raw input event into the accumulators. Events arriving
    /// while controls are inactive are dropped.
    pub fn handle_event(&mut self, event: CameraEvent) {
        if let Some(controls) = &mut self.controls {
            controls.input.apply(event);
        }
    }

    /// Run one control cycle, resolving accumulated input in priority
    /// order: reset, wheel dolly, orbit drag, click.
    ///
    /// Must be called once per logical frame before rendering. A pending
    /// reset consumes the whole cycle; other accumulators stay latched
    /// for the next one.
    pub fn control(&mut self) -> Result<(), CameraError> {
        let controls = self
            .controls
            .as_mut()
            .ok_or(CameraError::ControlsNotInitialized)?;

        if controls.input.take_reset() {
            self.reset();
            return Ok(());
        }

        let wheel = controls.input.take_wheel();
        if wheel != 0.0 {
            // Dolly along view-local z.
            self.view = translation(Vec3::new(0.0, 0.0, wheel)) * self.view;
        }

        let movement = controls.input.consume_movement();

        if controls.input.right_held() && movement != Vec2::ZERO {
            // Orbit the look direction about the world axes while the
            // eye stays put: rotate, then restore the translation column.
            let eye = self.view.w_axis;
            self.view = axis_rotation(Vec3::Y, -movement.x / ORBIT_SENSITIVITY) * self.view;
            self.view = axis_rotation(Vec3::X, -movement.y / ORBIT_SENSITIVITY) * self.view;
            self.view.w_axis = eye;
        }

        if controls.input.take_left_click() {
            let position = controls.input.pointer();
            for callback in controls.callbacks.iter_mut() {
                callback(position.x, position.y);
            }
        }

        Ok(())
    }

    /// Overwrite the view matrix with the default tilted-back pose.
    pub fn reset(&mut self) {
        self.reset_to(RESET_TILT, RESET_OFFSET);
    }

    /// Overwrite the view matrix: translate to `offset`, then tilt by
    /// `tilt` radians about the world X axis. Deterministic regardless
    /// of prior state.
    pub fn reset_to(&mut self, tilt: f32, offset: Vec3) {
        self.view = rotation_x(tilt) * translation(offset);
    }

    /// Overwrite the view matrix with an orthonormal basis looking from
    /// `position` toward the world origin, up fixed to +Y.
    ///
    /// Undefined when `position` is parallel to the up vector (the cross
    /// product degenerates); callers must avoid that axis.
    pub fn look_at_center(&mut self, position: Vec3) {
        let up = Vec3::Y;
        let z_axis = (-position).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        self.view = Mat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            position.extend(1.0),
        );
    }

    /// Push the current view matrix to its uniform slot. Call after
    /// `control`, before issuing draw calls.
    pub fn upload_view(&mut self) {
        self.view_slot.set(self.view.to_cols_array_2d());
    }

    /// Current view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Current projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Viewport the projection was derived from.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullSlot;

    impl MatrixSlot for NullSlot {
        fn set(&mut self, _matrix: [[f32; 4]; 4]) {}
    }

    fn test_camera() -> Camera {
        Camera::new(
            Box::new(NullSlot),
            Box::new(NullSlot),
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn new_camera_has_identity_view() {
        let camera = test_camera();
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn reset_is_deterministic() {
        let mut a = test_camera();
        let mut b = test_camera();
        b.look_at_center(Vec3::new(3.0, 4.0, 5.0));
        a.reset();
        b.reset();
        assert_eq!(a.view_matrix(), b.view_matrix());
    }

    #[test]
    fn reset_places_eye_at_offset_before_tilt() {
        let mut camera = test_camera();
        camera.reset_to(0.0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            camera.view_matrix().w_axis,
            Vec3::new(1.0, 2.0, 3.0).extend(1.0)
        );
    }

    #[test]
    fn look_at_center_builds_orthonormal_basis() {
        let mut camera = test_camera();
        camera.look_at_center(Vec3::new(0.0, -25.0, -35.0));
        let m = camera.view_matrix();

        let x = m.x_axis.truncate();
        let y = m.y_axis.truncate();
        let z = m.z_axis.truncate();

        assert!((x.length() - 1.0).abs() < 1e-6);
        assert!((y.length() - 1.0).abs() < 1e-6);
        assert!((z.length() - 1.0).abs() < 1e-6);
        assert!(x.dot(y).abs() < 1e-6);
        assert!(y.dot(z).abs() < 1e-6);
        assert!(z.dot(x).abs() < 1e-6);
    }

    #[test]
    fn look_at_center_points_z_toward_origin() {
        let mut camera = test_camera();
        let position = Vec3::new(10.0, 0.0, 10.0);
        camera.look_at_center(position);
        let z = camera.view_matrix().z_axis.truncate();
        let expected = (-position).normalize();
        assert!((z - expected).length() < 1e-6);
    }

    #[test]
    fn teardown_makes_control_fail_again() {
        let mut camera = test_camera();
        camera.init_controls(Vec::new()).unwrap();
        assert!(camera.controls_active());
        assert!(camera.control().is_ok());
        camera.teardown_controls();
        assert!(!camera.controls_active());
        assert_eq!(camera.control(), Err(CameraError::ControlsNotInitialized));
    }

    #[test]
    fn double_activation_is_rejected() {
        let mut camera = test_camera();
        camera.init_controls(Vec::new()).unwrap();
        assert_eq!(
            camera.init_controls(Vec::new()),
            Err(CameraError::ControlsAlreadyActive)
        );
    }

    #[test]
    fn events_before_activation_are_dropped() {
        let mut camera = test_camera();
        camera.handle_event(CameraEvent::Wheel { delta: 5.0 });
        camera.init_controls(Vec::new()).unwrap();
        camera.control().unwrap();
        // The pre-activation wheel event must not have dollied the view.
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
    }
}
