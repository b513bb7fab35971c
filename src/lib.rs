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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests lean on unwrap for brevity
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Orbit/zoom/pan camera controller for real-time 3D scenes.
//!
//! Given accumulated pointer and wheel input, [`camera::OrbitCamera`]
//! derives an eye position, look-at target and up vector each frame and
//! hands them to a [`camera::CameraSink`]. It never touches projection or
//! rendering state.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the per-frame controller
//! - [`camera::orbit`] - the pure orbit math it is built from
//! - [`input`] - input samples, event accumulation and script playback
//! - [`options::Options`] - tunables and button bindings (TOML presets)
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use orbitcam::camera::{Camera, OrbitCamera};
//! use orbitcam::input::{InputAccumulator, InputEvent, MouseButton};
//! use orbitcam::options::CameraOptions;
//!
//! let mut camera = OrbitCamera::new(
//!     Vec3::ZERO,
//!     CameraOptions::default(),
//!     InputAccumulator::default(),
//!     Camera::default(),
//! );
//! camera.input_mut().handle_event(InputEvent::MouseButton {
//!     button: MouseButton::Left,
//!     pressed: true,
//! });
//! camera.update(1.0 / 60.0);
//! assert!((camera.sink().eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use error::OrbitCamError;
