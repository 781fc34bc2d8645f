//! Physical parameters of the damped wave equation
//! ∂²u/∂t² + K·∂u/∂t = C²·∇²u on a grid with unit cell spacing.

use crate::error::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveParams {
    /// Wave speed `C`, cells per unit time.
    pub wave_speed: f64,

    /// Damping coefficient `K`.
    pub damping: f64,

    /// Time step `dt`.
    pub dt: f64,
}

impl Default for WaveParams {
    /// The demo constants the field viewer was tuned with.
    fn default() -> Self {
        WaveParams {
            wave_speed: 12.0,
            damping: 0.9,
            dt: 0.05,
        }
    }
}

impl WaveParams {
    pub fn new(wave_speed: f64, damping: f64, dt: f64) -> Self {
        WaveParams {
            wave_speed,
            damping,
            dt,
        }
    }

    /// Requires finite values with `C > 0`, `K >= 0` and `dt > 0`.
    pub fn validate(&self) -> Result<()> {
        if !(self.wave_speed.is_finite() && self.wave_speed > 0.0) {
            return Err(WaveError::InvalidParameter {
                name: "wave_speed",
                value: self.wave_speed,
            });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(WaveError::InvalidParameter {
                name: "damping",
                value: self.damping,
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(WaveError::InvalidParameter {
                name: "dt",
                value: self.dt,
            });
        }
        Ok(())
    }

    /// `C·dt / dx` with `dx = 1`.
    pub fn courant_number(&self) -> f64 {
        self.wave_speed * self.dt
    }

    /// CFL condition for the 2D five point stencil: `C·dt/dx <= 1/sqrt(2)`.
    /// Unstable parameters are still accepted by the solvers.
    pub fn is_stable(&self) -> bool {
        self.courant_number() <= std::f64::consts::FRAC_1_SQRT_2
    }
}
