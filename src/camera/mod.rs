//! Camera rigs for 3D scene viewing.
//!
//! The [`rig::CameraRig`] trait is the contract a host render loop codes
//! against; [`free::FreeCamera`] and [`target::TargetCamera`] are the two
//! concrete rigs. Shared orientation/projection state lives in
//! [`core::CameraCore`].

/// Shared orientation, basis, and projection state.
pub mod core;
/// First-person fly camera.
pub mod free;
/// View frustum construction and intersection tests.
pub mod frustum;
/// The common camera rig contract.
pub mod rig;
/// Orbit camera circling a focus point.
pub mod target;
/// GPU uniform layout for camera state.
pub mod uniform;
