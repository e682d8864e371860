use glam::Vec3;

use crate::camera::acceleration::{AccelerationModel, Accelerations};
use crate::camera::core::{range_value, Camera, CameraState};
use crate::camera::frustum::{Aabb, Ray};
use crate::camera::interpolator::{Glide, GlidePace, GlideVelocities, Scalar};
use crate::camera::screen::ScreenInfo;
use crate::input::{
    CameraInput, DesktopInput, InputContext, InputEvent, TouchInput,
};
use crate::options::{CameraOptions, KeybindingOptions};

/// Elevation within this many degrees of `theta_max` counts as top view.
const TOP_VIEW_EPSILON: f32 = 0.01;
/// Initial elevation in degrees.
const INITIAL_THETA: f32 = 55.0;
/// Initial look-at center.
const INITIAL_CENTER: Vec3 = Vec3::new(0.0, 3.0, 0.0);

/// `value` if finite, otherwise `fallback`.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Per-component [`finite_or`].
fn finite_center_or(center: Vec3, fallback: Vec3) -> Vec3 {
    Vec3::new(
        finite_or(center.x, fallback.x),
        finite_or(center.y, fallback.y),
        finite_or(center.z, fallback.z),
    )
}

/// What drives the pose on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    /// Input feeds the acceleration model.
    Free,
    /// The six interpolators glide toward a target; input is not polled.
    Gliding,
}

/// Orbit camera controller: input → inertia (or target glide) → pose →
/// render camera, one call to [`do_move`](Self::do_move) per tick.
pub struct CameraController {
    options: CameraOptions,
    state: CameraState,
    saved: CameraState,
    acceleration: AccelerationModel,
    glide: Glide,
    mode: MotionMode,
    input: Box<dyn CameraInput>,
    camera: Camera,
}

impl CameraController {
    /// Create a controller fed by `input`.
    ///
    /// On double-sized GUI screens the touch factors are doubled. The render
    /// camera is posed immediately. Options that fail
    /// [`CameraOptions::validate`] are logged and used as given; callers that
    /// need a hard failure should validate first.
    pub fn new(
        options: CameraOptions,
        screen: &ScreenInfo,
        input: Box<dyn CameraInput>,
    ) -> Self {
        let options = if screen.should_use_double_sized_gui() {
            options.scaled_for_double_sized_gui()
        } else {
            options
        };
        if let Err(e) = options.validate() {
            log::warn!("camera options used as given: {e}");
        }

        let state = CameraState {
            center: INITIAL_CENTER,
            phi: 0.0,
            theta: INITIAL_THETA,
            zoom: (options.zoom_min - options.zoom_max) / 2.0,
        };

        let mut glide = Glide::default();
        glide.flush(&state);

        let camera = Camera {
            eye: state.eye(),
            target: state.center,
            up: Vec3::Y,
            aspect: screen.aspect(),
            fovy: options.fovy,
            znear: options.near_clip_distance,
            zfar: options.far_clip_distance,
        };

        log::debug!(
            "camera controller created ({}x{}, double-sized GUI: {})",
            screen.width(),
            screen.height(),
            screen.should_use_double_sized_gui()
        );

        Self {
            options,
            state,
            saved: state,
            acceleration: AccelerationModel::default(),
            glide,
            mode: MotionMode::Free,
            input,
            camera,
        }
    }

    /// Controller driven by keyboard and mouse.
    pub fn desktop(
        options: CameraOptions,
        screen: &ScreenInfo,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self::new(options, screen, Box::new(DesktopInput::new(key_bindings)))
    }

    /// Controller driven by multi-touch gestures.
    pub fn touch(options: CameraOptions, screen: &ScreenInfo) -> Self {
        Self::new(options, screen, Box::new(TouchInput::new()))
    }

    // ── Input & tick ─────────────────────────────────────────────────────

    /// Forward a raw event to the input source. Returns whether it was
    /// used.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.input.handle_event(event)
    }

    /// Advance one tick. Returns whether the camera changed or input was
    /// claimed by the camera.
    pub fn do_move(&mut self) -> bool {
        match self.mode {
            MotionMode::Gliding => {
                self.advance_glide();
                true
            }
            MotionMode::Free => {
                let consumed = self.poll_input();
                let moved = self.acceleration.apply(&mut self.state, &self.options);
                if moved {
                    self.look_at();
                }
                consumed || moved
            }
        }
    }

    fn poll_input(&mut self) -> bool {
        let ctx = InputContext {
            state: &self.state,
            options: &self.options,
            gates: self.acceleration.gates(),
        };
        let delta = self.input.poll(&ctx);
        self.acceleration.absorb(&delta);
        delta.consumed
    }

    fn advance_glide(&mut self) {
        self.glide.advance(&mut self.state);
        self.acceleration.clear();
        if !self.glide.need_update() {
            self.mode = MotionMode::Free;
            log::debug!(
                "camera glide finished at phi {:.2} theta {:.2} zoom {:.2}",
                self.state.phi,
                self.state.theta,
                self.state.zoom
            );
        }
        self.look_at();
    }

    fn look_at(&mut self) {
        self.camera.apply_pose(self.state.eye(), self.state.center);
    }

    // ── Immediate setters ────────────────────────────────────────────────

    /// Snap the whole pose, cancelling any glide and inertia. Non-finite
    /// components keep their current value.
    pub fn set(&mut self, center: Vec3, phi: f32, theta: f32, zoom: f32) {
        let current = self.state;
        self.state = CameraState {
            center: self
                .acceleration
                .clamp_center(finite_center_or(center, current.center)),
            phi: range_value(finite_or(phi, current.phi)),
            theta: finite_or(theta, current.theta),
            zoom: finite_or(zoom, current.zoom),
        };
        self.acceleration.clear();
        self.glide.flush(&self.state);
        self.mode = MotionMode::Free;
        self.look_at();
    }

    /// Snap the center (clamped into the area limit, if any).
    pub fn set_position(&mut self, center: Vec3) {
        self.state.center = self
            .acceleration
            .clamp_center(finite_center_or(center, self.state.center));
        self.glide.flush_center(self.state.center);
        self.look_at();
    }

    /// Snap the azimuth, cancelling any glide.
    pub fn set_current_phi(&mut self, phi: f32) {
        self.state.phi = range_value(finite_or(phi, self.state.phi));
        self.glide.flush(&self.state);
        self.mode = MotionMode::Free;
        self.look_at();
    }

    /// Remember the current pose. A single slot: a second push overwrites.
    pub fn push(&mut self) {
        self.saved = self.state;
        log::debug!("camera state pushed");
    }

    /// Return to the pushed pose, immediately or as a glide.
    pub fn pop(&mut self, as_target: bool) {
        let saved = self.saved;
        if as_target {
            self.start_glide(&saved, self.default_pace());
        } else {
            self.state = saved;
            self.look_at();
        }
        log::debug!("camera state popped (as target: {as_target})");
    }

    // ── Glides ───────────────────────────────────────────────────────────

    /// Glide to a pose at the configured default velocities.
    pub fn set_target(&mut self, center: Vec3, phi: f32, theta: f32, zoom: f32) {
        let target = CameraState {
            center,
            phi,
            theta,
            zoom,
        };
        self.start_glide(&target, self.default_pace());
    }

    /// Glide to a pose at explicit per-tick velocities.
    pub fn set_target_with_velocities(
        &mut self,
        center: Vec3,
        phi: f32,
        theta: f32,
        zoom: f32,
        velocities: GlideVelocities,
    ) {
        let target = CameraState {
            center,
            phi,
            theta,
            zoom,
        };
        self.start_glide(&target, GlidePace::Velocities(velocities));
    }

    /// Glide to a pose, arriving after exactly `steps` ticks.
    pub fn set_target_in_steps(
        &mut self,
        center: Vec3,
        phi: f32,
        theta: f32,
        zoom: f32,
        steps: u32,
    ) {
        let target = CameraState {
            center,
            phi,
            theta,
            zoom,
        };
        self.start_glide(&target, GlidePace::Steps(steps));
    }

    /// Glide only the azimuth, at the configured angular velocity.
    pub fn set_phi(&mut self, phi: f32) {
        let pace = self.default_pace();
        self.glide.flush(&self.state);
        if self.acceleration.gates().rotate && phi.is_finite() {
            self.glide.aim(Scalar::Phi, range_value(phi), pace);
        }
        self.begin_gliding();
    }

    fn default_pace(&self) -> GlidePace {
        GlidePace::Velocities(GlideVelocities {
            linear: self.options.linear_velocity,
            angular: self.options.angular_velocity,
            zoom: self.options.zoom_velocity,
        })
    }

    /// Flush the interpolators from the live pose, then aim each one at
    /// `target`. Axes whose gate is closed, or whose target is not finite,
    /// keep their current value.
    fn start_glide(&mut self, target: &CameraState, pace: GlidePace) {
        self.glide.flush(&self.state);

        let gates = self.acceleration.gates();
        let current = self.state;
        let target = CameraState {
            center: if gates.translate {
                self.acceleration
                    .clamp_center(finite_center_or(target.center, current.center))
            } else {
                current.center
            },
            phi: if gates.rotate {
                range_value(finite_or(target.phi, current.phi))
            } else {
                current.phi
            },
            theta: if gates.rotate {
                finite_or(target.theta, current.theta)
            } else {
                current.theta
            },
            zoom: if gates.zoom {
                finite_or(target.zoom, current.zoom)
            } else {
                current.zoom
            },
        };
        self.glide.aim_all(&target, pace);

        log::debug!(
            "camera glide started toward phi {:.2} theta {:.2} zoom {:.2}",
            target.phi,
            target.theta,
            target.zoom
        );
        self.begin_gliding();
    }

    fn begin_gliding(&mut self) {
        self.acceleration.clear();
        self.mode = MotionMode::Gliding;
    }

    // ── Gates & limits ───────────────────────────────────────────────────

    /// Accept rotation input.
    pub fn enable_rotations(&mut self) {
        self.acceleration.gates_mut().rotate = true;
    }

    /// Accept translation input.
    pub fn enable_translations(&mut self) {
        self.acceleration.gates_mut().translate = true;
    }

    /// Accept zoom input.
    pub fn enable_zoom_changes(&mut self) {
        self.acceleration.gates_mut().zoom = true;
    }

    /// Ignore rotation input.
    pub fn disable_rotations(&mut self) {
        self.acceleration.gates_mut().rotate = false;
    }

    /// Ignore translation input.
    pub fn disable_translations(&mut self) {
        self.acceleration.gates_mut().translate = false;
    }

    /// Ignore zoom input.
    pub fn disable_zoom_changes(&mut self) {
        self.acceleration.gates_mut().zoom = false;
    }

    /// Keep the center inside the box spanned by `min` and `max`, for both
    /// input motion and glide targets.
    pub fn limit_camera_area(&mut self, min: Vec3, max: Vec3) {
        self.acceleration.limit_area(Aabb::new(min, max));
        log::debug!("camera area limited to {min} .. {max}");
    }

    /// Drop the area limit.
    pub fn remove_camera_area_limits(&mut self) {
        self.acceleration.remove_area_limit();
        log::debug!("camera area limit removed");
    }

    // ── Render camera ────────────────────────────────────────────────────

    /// Change the near clip plane distance.
    pub fn set_near_clip_distance(&mut self, near: f32) {
        self.options.near_clip_distance = near;
        self.camera.znear = near;
    }

    /// Change the far clip plane distance.
    pub fn set_far_clip_distance(&mut self, far: f32) {
        self.options.far_clip_distance = far;
        self.camera.zfar = far;
    }

    /// Update the render camera aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Whether `bbox` is inside the render camera's view.
    #[must_use]
    pub fn is_visible(&self, bbox: &Aabb) -> bool {
        self.camera.is_visible(bbox)
    }

    /// World-space ray through normalized viewport point `(x, y)`.
    #[must_use]
    pub fn viewport_ray(&self, x: f32, y: f32) -> Ray {
        self.camera.viewport_ray(x, y)
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The render camera as of the last look-at.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Live pose.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Session options (touch factors already scaled for the screen).
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Current accelerator values.
    #[must_use]
    pub fn accelerations(&self) -> &Accelerations {
        self.acceleration.accelerations()
    }

    /// Whether a glide is in flight.
    #[must_use]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Look-at center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.state.center
    }

    /// Azimuth in degrees.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.state.phi
    }

    /// Elevation in degrees.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.state.theta
    }

    /// Distance from the center.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    /// Whether the camera looks straight down (elevation at its maximum).
    #[must_use]
    pub fn is_top_view(&self) -> bool {
        self.state.theta >= self.options.theta_max - TOP_VIEW_EPSILON
    }
}
