//! Drive parameters and the analytic propagator for the driven two-level
//! system.
//!
//! All frequencies are in units of angular frequency and all times in the
//! reciprocal units. The propagator is obtained by rotating into the dressed
//! basis, applying free phase evolution at the effective Rabi frequency, and
//! rotating back:
//! ```text
//! U(t) = Ry(α) Rz(Ω t) Ry(-α)
//! ```

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    error::{ RabiError, RabiResult, finite },
    hilbert::check_two_level,
    rotation::{ Ry, Rz },
};

/// Physical parameters of the drive.
///
/// Defaults to the resonant single-photon case `Δ = 0`, `n = 1`, `g = 1`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabiParams {
    /// Detuning Δ.
    pub detuning: f64,
    /// Photon number n. Need not be an integer.
    pub photons: f64,
    /// Atom-field coupling strength g.
    pub coupling: f64,
}

impl Default for RabiParams {
    fn default() -> Self {
        Self { detuning: 0.0, photons: 1.0, coupling: 1.0 }
    }
}

impl RabiParams {
    /// Create a new set of parameters, checking that they're valid.
    pub fn new(detuning: f64, photons: f64, coupling: f64) -> RabiResult<Self> {
        let params = Self { detuning, photons, coupling };
        params.validate()?;
        Ok(params)
    }

    /// Check that all parameters are finite and that the photon number and
    /// coupling are non-negative.
    pub fn validate(&self) -> RabiResult<()> {
        finite("detuning", self.detuning)?;
        finite("photons", self.photons)?;
        finite("coupling", self.coupling)?;
        if self.photons < 0.0 {
            return Err(RabiError::NegativePhotonNumber(self.photons));
        }
        if self.coupling < 0.0 {
            return Err(RabiError::NegativeCoupling(self.coupling));
        }
        Ok(())
    }

    // 2 g sqrt(n), the off-diagonal coupling in the dressed-state problem
    fn coupling_term(&self) -> f64 { 2.0 * self.coupling * self.photons.sqrt() }

    /// Effective Rabi frequency `Ω = sqrt(4 g^2 n + Δ^2)`.
    ///
    /// Fails with [`RabiError::RabiFrequencyOverflow`] if `Ω` is too large to
    /// represent.
    pub fn rabi_freq(&self) -> RabiResult<f64> {
        self.validate()?;
        let W = self.coupling_term().hypot(self.detuning);
        if !W.is_finite() { return Err(RabiError::RabiFrequencyOverflow); }
        Ok(W)
    }

    /// Mixing angle `α = 2 arctan(sqrt((Ω - Δ) / (Ω + Δ)))` between the bare
    /// and dressed bases, evaluated as `atan2(2 g sqrt(n), Δ)`.
    ///
    /// Fails with [`RabiError::DegenerateMixingAngle`] when `g^2 n = 0` and
    /// `Δ ≤ 0`, where `Ω + Δ` vanishes exactly.
    pub fn mixing_angle(&self) -> RabiResult<f64> {
        let W = self.rabi_freq()?;
        let D = self.detuning;
        let G = self.coupling_term();
        if G == 0.0 && D <= 0.0 {
            return Err(RabiError::DegenerateMixingAngle {
                detuning: D,
                rabi_freq: W,
            });
        }
        Ok(G.atan2(D))
    }

    /// Duration of one full Rabi cycle, `2π / Ω`.
    pub fn period(&self) -> RabiResult<f64> {
        let W = self.rabi_freq()?;
        let T = TAU / W;
        if W <= 0.0 || !T.is_finite() {
            return Err(RabiError::VanishingRabiFrequency);
        }
        Ok(T)
    }

    /// `samples` evenly spaced times covering one period, excluding the
    /// endpoint.
    pub fn time_grid(&self, samples: usize) -> RabiResult<nd::Array1<f64>> {
        if samples == 0 { return Err(RabiError::NoSamples); }
        let dt = self.period()? / samples as f64;
        Ok(nd::Array1::from_shape_fn(samples, |k| k as f64 * dt))
    }
}

/// Time-evolution operator for a fixed set of [`RabiParams`].
///
/// The effective Rabi frequency, mixing angle, and the two fixed basis
/// rotations are computed once on construction.
#[derive(Clone, Debug)]
pub struct Propagator {
    params: RabiParams,
    rabi_freq: f64,
    mixing_angle: f64,
    into_dressed: nd::Array2<C64>,
    from_dressed: nd::Array2<C64>,
}

impl Propagator {
    /// Validate `params` and precompute the dressed-basis rotations.
    pub fn new(params: RabiParams) -> RabiResult<Self> {
        let rabi_freq = params.rabi_freq()?;
        let mixing_angle = params.mixing_angle()?;
        log::debug!(
            "propagator: Δ = {}, n = {}, g = {} => Ω = {:.6}, α = {:.6}",
            params.detuning, params.photons, params.coupling,
            rabi_freq, mixing_angle,
        );
        Ok(Self {
            params,
            rabi_freq,
            mixing_angle,
            into_dressed: Ry(-mixing_angle),
            from_dressed: Ry(mixing_angle),
        })
    }

    /// Return the parameters this propagator was built from.
    pub fn params(&self) -> &RabiParams { &self.params }

    /// Return the effective Rabi frequency Ω.
    pub fn rabi_freq(&self) -> f64 { self.rabi_freq }

    /// Return the mixing angle α.
    pub fn mixing_angle(&self) -> f64 { self.mixing_angle }

    /// Compute `U(t)`.
    pub fn at(&self, t: f64) -> nd::Array2<C64> {
        self.from_dressed
            .dot(&Rz(self.rabi_freq * t))
            .dot(&self.into_dressed)
    }

    /// Apply `U(t)` to a state.
    ///
    /// Fails if `psi` is not a two-level state. `psi` is otherwise assumed
    /// normalized; a non-normalized input is propagated as-is.
    pub fn apply<S>(&self, t: f64, psi: &nd::ArrayBase<S, nd::Ix1>)
        -> RabiResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        check_two_level(psi)?;
        Ok(self.at(t).dot(psi))
    }

    /// Compute the evolution of the initial state `psi0` over times `t`.
    ///
    /// The returned array has shape `(2, t.len())`; the last index corresponds
    /// to time.
    pub fn evolve<S>(&self, psi0: &nd::ArrayBase<S, nd::Ix1>, t: &nd::Array1<f64>)
        -> RabiResult<nd::Array2<C64>>
    where S: nd::Data<Elem = C64>
    {
        check_two_level(psi0)?;
        let mut psi: nd::Array2<C64> = nd::Array::zeros((2, t.len()));
        let iter = t.iter().zip(psi.axis_iter_mut(nd::Axis(1)));
        for (&tk, psik) in iter {
            self.at(tk).dot(psi0).move_into(psik);
        }
        Ok(psi)
    }
}

/// Compute `U(t) = Ry(α) Rz(Ω t) Ry(-α)` for a single time.
pub fn propagator(t: f64, params: &RabiParams) -> RabiResult<nd::Array2<C64>> {
    Ok(Propagator::new(*params)?.at(t))
}
