//! Run configuration, loadable from TOML.
//!
//! Every field has a default, so a document only needs to name what it
//! changes:
//! ```toml
//! samples = 40
//!
//! [state]
//! theta = 0.7853981633974483
//!
//! [drive]
//! detuning = 0.5
//! ```

use std::{ f64::consts::FRAC_PI_4, fs, path::Path };
use serde::{ Deserialize, Serialize };
use crate::{
    dynamics::RabiParams,
    error::{ RabiError, RabiResult },
    hilbert::InitialState,
    render::BlochFigure,
};

/// Default number of time samples per Rabi period.
pub const DEFAULT_SAMPLES: usize = 40;

/// Everything needed to sample and draw one trajectory.
///
/// Defaults: `θ = 0`, `φ = 0`, `Δ = 0`, `n = 1`, `g = 1`, `N = 40`, and the
/// default [`BlochFigure`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabiConfig {
    /// Initial state on the Bloch sphere.
    pub state: InitialState,
    /// Drive parameters.
    pub drive: RabiParams,
    /// Number of time samples over one Rabi period.
    pub samples: usize,
    /// Figure appearance.
    pub figure: BlochFigure,
}

impl Default for RabiConfig {
    fn default() -> Self {
        Self {
            state: InitialState::default(),
            drive: RabiParams::default(),
            samples: DEFAULT_SAMPLES,
            figure: BlochFigure::default(),
        }
    }
}

impl RabiConfig {
    /// The reference run: start at `θ = π/4`, `φ = 0`, partway between
    /// `|g, n⟩` and the equator, with every other field at its default.
    pub fn reference() -> Self {
        Self {
            state: InitialState::new(FRAC_PI_4, 0.0),
            ..Self::default()
        }
    }

    /// Check every field, including the mixing-angle degeneracy.
    pub fn validate(&self) -> RabiResult<()> {
        self.state.validate()?;
        self.drive.mixing_angle()?;
        if self.samples == 0 { return Err(RabiError::NoSamples); }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> RabiResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load<P>(path: P) -> RabiResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
