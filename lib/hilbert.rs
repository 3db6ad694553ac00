//! Two-level state vectors.
//!
//! States are 1D complex arrays `[c_g, c_e]`, where the first element is the
//! amplitude of the ground branch `|g, n⟩` and the second that of the excited
//! branch `|e, n - 1⟩`.

use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::error::{ RabiError, RabiResult, finite };

/// Compute a "norm" of an object, treating it as a representation of a quantum
/// state.
pub trait StateNorm {
    fn norm(&self) -> f64;
}

/// The norm of a state vector is the quadrature sum of its elements.
impl<S> StateNorm for nd::ArrayBase<S, nd::Ix1>
where S: nd::Data<Elem = C64>
{
    fn norm(&self) -> f64 { self.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt() }
}

// every operator here acts on the two-level manifold only
pub(crate) fn check_two_level<S>(psi: &nd::ArrayBase<S, nd::Ix1>) -> RabiResult<()>
where S: nd::Data<Elem = C64>
{
    if psi.len() == 2 { Ok(()) } else { Err(RabiError::StateDimension(psi.len())) }
}

/// Construct the pure state at polar angle `theta` and azimuthal angle `phi` on
/// the Bloch sphere,
/// ```text
/// |ψ⟩ = cos(θ/2) |g⟩ + exp(i φ) sin(θ/2) |e⟩
/// ```
///
/// The result is normalized by construction.
pub fn psi0(theta: f64, phi: f64) -> nd::Array1<C64> {
    let half = theta / 2.0;
    nd::array![
        C64::from(half.cos()),
        C64::from_polar(half.sin(), phi),
    ]
}

/// Angles specifying the initial state on the Bloch sphere.
///
/// Both default to zero, i.e. the state starts at the north pole `|g, n⟩`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialState {
    /// Polar angle θ, in radians.
    pub theta: f64,
    /// Azimuthal angle φ, in radians.
    pub phi: f64,
}

impl InitialState {
    /// Create a new initial state description.
    pub fn new(theta: f64, phi: f64) -> Self { Self { theta, phi } }

    /// Check that both angles are finite.
    pub fn validate(&self) -> RabiResult<()> {
        finite("theta", self.theta)?;
        finite("phi", self.phi)?;
        Ok(())
    }

    /// Build the state vector, if the angles are valid.
    pub fn vector(&self) -> RabiResult<nd::Array1<C64>> {
        self.validate()?;
        Ok(psi0(self.theta, self.phi))
    }
}
