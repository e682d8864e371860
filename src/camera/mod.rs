//! Orbit camera: pose, inertia, target glides and the render camera the
//! pose is written to.
//!
//! The [`controller::CameraController`] ties the pieces together; the other
//! modules are usable on their own.

/// Accelerators, friction and motion gates.
pub mod acceleration;
/// Tick-driven controller combining input, inertia and glides.
pub mod controller;
/// Orbit pose and the render camera.
pub mod core;
/// View frustum extraction, bounding boxes and rays.
pub mod frustum;
/// Fixed-step scalar interpolation toward targets.
pub mod interpolator;
/// Viewport metrics.
pub mod screen;
