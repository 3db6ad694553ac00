#![allow(non_snake_case)]

//! Semiclassical Rabi oscillations of a two-level system on the Bloch sphere.
//!
//! The pipeline is strictly linear: build an initial state, compose the
//! analytic propagator for a set of drive parameters, sample one Rabi period,
//! and render the resulting Bloch-sphere trajectory.

pub mod utils;
pub mod error;
pub mod config;
pub mod hilbert;
pub mod rotation;
pub mod dynamics;
pub mod bloch;
pub mod render;

pub use error::{ RabiError, RabiResult };
pub use config::RabiConfig;
pub use hilbert::{ InitialState, StateNorm, psi0 };
pub use rotation::{ Ry, Rz };
pub use dynamics::{ Propagator, RabiParams, propagator };
pub use bloch::{ BlochAngles, BlochVector, Trajectory, rabi_trajectory };
pub use render::{ BlochFigure, BlochPlot };
