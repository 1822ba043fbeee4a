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
// Graphics math allowances: exact float comparisons and short vector names
// are pervasive and intentional
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::cast_precision_loss)]

//! Camera rigs for real-time 3D viewers, built on glam.
//!
//! Two interchangeable rigs implement one contract,
//! [`camera::rig::CameraRig`]:
//!
//! - [`camera::free::FreeCamera`] - first-person fly camera driven by
//!   walk/strafe/lift displacements
//! - [`camera::target::TargetCamera`] - orbit camera circling a focus
//!   point at a clamped distance
//!
//! A host render loop feeds input displacements into a rig's mutators and
//! reads back the view matrix once per frame. The crate also provides
//! view-frustum culling tests ([`camera::frustum`]), a GPU-layout view
//! uniform ([`camera::uniform`]), and TOML-backed configuration
//! ([`options::Options`]). Windowing, input decoding, and GPU resource
//! management belong to the host.

pub mod camera;
pub mod error;
pub mod options;

pub use camera::free::FreeCamera;
pub use camera::rig::CameraRig;
pub use camera::target::TargetCamera;
