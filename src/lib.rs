// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera controller with inertia, target glides and desktop or
//! multi-touch input.
//!
//! The camera orbits a look-at center at azimuth `phi`, elevation `theta`
//! and distance `zoom`. Each tick, input nudges per-axis accelerators that
//! decay under linear friction, or, while a target glide is in flight, six
//! fixed-step interpolators carry the pose to its destination. The resulting
//! pose is written to a render [`camera::core::Camera`].
//!
//! # Key entry points
//!
//! - [`CameraController`] - the per-tick controller
//! - [`Options`] - camera, display and key binding configuration (TOML)
//! - [`input::InputEvent`] - platform-agnostic events fed to the controller
//! - [`util::frame_timing::FrameTiming`] - fixed-rate tick clock
//!
//! # Example
//!
//! ```
//! use orbicam::input::InputEvent;
//! use orbicam::{CameraController, Options, ScreenInfo};
//!
//! let options = Options::default();
//! let screen = ScreenInfo::new(1280, 720, 1.0, &options.display);
//! let mut camera =
//!     CameraController::desktop(options.camera, &screen, options.keybindings);
//!
//! let _ = camera.handle_event(&InputEvent::Key {
//!     code: "ArrowUp".into(),
//!     pressed: true,
//! });
//! assert!(camera.do_move());
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::controller::{CameraController, MotionMode};
pub use camera::core::CameraState;
pub use camera::screen::ScreenInfo;
pub use error::OrbicamError;
pub use options::Options;
