//! Error types for parameter validation, sampling, rendering, and I/O.

use thiserror::Error;

/// Everything that can go wrong between reading parameters and writing a
/// figure.
#[derive(Debug, Error)]
pub enum RabiError {
    /// A parameter or angle was NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// The photon number was negative.
    #[error("photon number must be non-negative, got {0}")]
    NegativePhotonNumber(f64),

    /// The coupling strength was negative.
    #[error("coupling strength must be non-negative, got {0}")]
    NegativeCoupling(f64),

    /// The coupling term vanished with `Δ ≤ 0`, leaving the mixing angle
    /// undefined.
    #[error(
        "mixing angle is undefined for detuning {detuning} with Rabi frequency \
        {rabi_freq} (requires g²n > 0 or Δ > 0)"
    )]
    DegenerateMixingAngle { detuning: f64, rabi_freq: f64 },

    /// The effective Rabi frequency was zero, so there is no period to sample.
    #[error("effective Rabi frequency vanishes; the system does not oscillate")]
    VanishingRabiFrequency,

    /// `√(4g²n + Δ²)` overflowed `f64`.
    #[error("effective Rabi frequency is too large to represent")]
    RabiFrequencyOverflow,

    /// A state vector did not have exactly two amplitudes.
    #[error("expected a two-level state, got {0} amplitudes")]
    StateDimension(usize),

    /// A trajectory was requested with zero time samples.
    #[error("sample count must be positive")]
    NoSamples,

    /// Trajectory components had different lengths.
    #[error("trajectory components differ in length: time={time}, x={x}, y={y}, z={z}")]
    LengthMismatch { time: usize, x: usize, y: usize, z: usize },

    /// A trajectory point handed to the renderer was NaN or infinite.
    #[error("trajectory point {0} is not finite")]
    NonFinitePoint(usize),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("npz error: {0}")]
    Npz(#[from] ndarray_npy::WriteNpzError),
}

pub type RabiResult<T> = Result<T, RabiError>;

/// Return `value` if finite, otherwise a [`RabiError::NonFinite`] naming it.
pub(crate) fn finite(name: &'static str, value: f64) -> RabiResult<f64> {
    value.is_finite()
        .then_some(value)
        .ok_or(RabiError::NonFinite { name, value })
}
