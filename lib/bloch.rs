//! Bloch-sphere coordinates and sampled Rabi trajectories.

use std::{ f64::consts::TAU, path::Path };
use itertools::izip;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    config::RabiConfig,
    dynamics::{ Propagator, RabiParams },
    error::{ RabiError, RabiResult },
    hilbert::check_two_level,
    write_npz,
};

/// A point on (or in) the Bloch sphere in Cartesian coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +z is `|g, n⟩`, -z is `|e, n - 1⟩`.
    pub z: f64,
}

/// Spherical angles of a [`BlochVector`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π].
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π).
    pub phi: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    /// Project a two-level state onto the Bloch sphere using the magnitudes of
    /// its amplitudes and their relative phase:
    /// ```text
    /// x = 2 r0 r1 cos(φ1 - φ0)
    /// y = 2 r0 r1 sin(φ1 - φ0)
    /// z = r0^2 - r1^2
    /// ```
    ///
    /// Fails with [`RabiError::StateDimension`] unless `psi` has exactly two
    /// elements.
    pub fn from_state<S>(psi: &nd::ArrayBase<S, nd::Ix1>) -> RabiResult<Self>
    where S: nd::Data<Elem = C64>
    {
        check_two_level(psi)?;
        let (r0, a0) = psi[0].to_polar();
        let (r1, a1) = psi[1].to_polar();
        let da = a1 - a0;
        Ok(Self {
            x: 2.0 * r0 * r1 * da.cos(),
            y: 2.0 * r0 * r1 * da.sin(),
            z: r0.powi(2) - r1.powi(2),
        })
    }

    /// Euclidean length; 1 for pure states.
    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Return `true` if the vector lies on the unit sphere to within `tol`.
    pub fn is_pure(&self, tol: f64) -> bool { (self.magnitude() - 1.0).abs() <= tol }

    /// Return `true` if all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to spherical angles. The zero vector maps to `θ = φ = 0`.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < 1e-12 { return BlochAngles { theta: 0.0, phi: 0.0 }; }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x).rem_euclid(TAU);
        BlochAngles { theta, phi }
    }
}

/// A sampled Bloch-sphere trajectory.
///
/// All four arrays have the same length and are index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    time: nd::Array1<f64>,
    x: nd::Array1<f64>,
    y: nd::Array1<f64>,
    z: nd::Array1<f64>,
}

impl Trajectory {
    /// Assemble a trajectory from its components, checking that their lengths
    /// agree.
    pub fn from_components(
        time: nd::Array1<f64>,
        x: nd::Array1<f64>,
        y: nd::Array1<f64>,
        z: nd::Array1<f64>,
    ) -> RabiResult<Self>
    {
        let n = time.len();
        if x.len() != n || y.len() != n || z.len() != n {
            return Err(RabiError::LengthMismatch {
                time: n,
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { time, x, y, z })
    }

    /// Sample the Bloch-sphere trajectory of `psi0` over one Rabi period using
    /// `samples` evenly spaced times.
    pub fn sample<S>(
        psi0: &nd::ArrayBase<S, nd::Ix1>,
        params: &RabiParams,
        samples: usize,
    ) -> RabiResult<Self>
    where S: nd::Data<Elem = C64>
    {
        check_two_level(psi0)?;
        let prop = Propagator::new(*params)?;
        let time = params.time_grid(samples)?;
        log::debug!(
            "sampling {} points over T = {:.6}",
            samples, TAU / prop.rabi_freq(),
        );
        let n = time.len();
        let mut x: nd::Array1<f64> = nd::Array1::zeros(n);
        let mut y: nd::Array1<f64> = nd::Array1::zeros(n);
        let mut z: nd::Array1<f64> = nd::Array1::zeros(n);
        let iter = izip!(time.iter(), x.iter_mut(), y.iter_mut(), z.iter_mut());
        for (&tk, xk, yk, zk) in iter {
            let v = BlochVector::from_state(&prop.apply(tk, psi0)?)?;
            *xk = v.x;
            *yk = v.y;
            *zk = v.z;
        }
        Ok(Self { time, x, y, z })
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize { self.time.len() }

    /// Return `true` if there are no sampled points.
    pub fn is_empty(&self) -> bool { self.time.is_empty() }

    /// Sample times.
    pub fn time(&self) -> &nd::Array1<f64> { &self.time }

    /// x-coordinates.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// y-coordinates.
    pub fn y(&self) -> &nd::Array1<f64> { &self.y }

    /// z-coordinates.
    pub fn z(&self) -> &nd::Array1<f64> { &self.z }

    /// Get the `k`-th point, if it exists.
    pub fn get(&self, k: usize) -> Option<BlochVector> {
        (k < self.len()).then(|| BlochVector::new(self.x[k], self.y[k], self.z[k]))
    }

    /// Iterate over all points in time order.
    pub fn points(&self) -> impl Iterator<Item = BlochVector> + '_ {
        izip!(self.x.iter(), self.y.iter(), self.z.iter())
            .map(|(&x, &y, &z)| BlochVector::new(x, y, z))
    }

    /// Largest deviation of any point from the unit sphere.
    pub fn max_radius_error(&self) -> f64 {
        self.points()
            .map(|v| (v.magnitude() - 1.0).abs())
            .fold(0.0, f64::max)
    }

    /// Decompose into `(time, x, y, z)`.
    pub fn into_components(self)
        -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>)
    {
        (self.time, self.x, self.y, self.z)
    }

    /// Write `time`, `x`, `y`, and `z` arrays to a `.npz` archive.
    pub fn save_npz<P>(&self, path: P) -> RabiResult<()>
    where P: AsRef<Path>
    {
        write_npz!(
            path.as_ref(),
            arrays: {
                "time" => &self.time,
                "x" => &self.x,
                "y" => &self.y,
                "z" => &self.z,
            }
        );
        Ok(())
    }
}

/// Sample the trajectory described by a full configuration.
pub fn rabi_trajectory(config: &RabiConfig) -> RabiResult<Trajectory> {
    let psi0 = config.state.vector()?;
    Trajectory::sample(&psi0, &config.drive, config.samples)
}
