use crate::domain::StencilArgs;
use crate::error::*;
use crate::params::WaveParams;

/// How the damping term `K·∂u/∂t` is discretized.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DampingScheme {
    /// Central difference for the velocity (Crank–Nicolson style):
    /// `next = (2(C·dt)²·lap + 4u - prev·(2 - K·dt)) / (2 + K·dt)`
    #[default]
    Implicit,

    /// Backward difference for the velocity:
    /// `next = 2u - prev - K·dt·(u - prev) + (C·dt)²·lap`
    Explicit,
}

/// Per-call coefficients of the damped wave update.
/// Everything that only depends on `(C, K, dt)` is folded here once
/// so the per-cell work is a handful of multiply-adds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveStencil {
    scheme: DampingScheme,

    /// `(C·dt)²`
    courant_sq: f64,

    /// `K·dt`
    damping_dt: f64,
}

impl WaveStencil {
    pub fn new(params: &WaveParams, scheme: DampingScheme) -> Result<Self> {
        params.validate()?;
        let c_dt = params.wave_speed * params.dt;
        Ok(WaveStencil {
            scheme,
            courant_sq: c_dt * c_dt,
            damping_dt: params.damping * params.dt,
        })
    }

    #[inline]
    pub fn apply(&self, args: &StencilArgs) -> f64 {
        let laplacian = args.laplacian();
        let u = args.current;
        let prev = args.previous;
        match self.scheme {
            DampingScheme::Implicit => {
                (2.0 * self.courant_sq * laplacian + 4.0 * u
                    - prev * (2.0 - self.damping_dt))
                    / (2.0 + self.damping_dt)
            }
            DampingScheme::Explicit => {
                2.0 * u - prev - self.damping_dt * (u - prev)
                    + self.courant_sq * laplacian
            }
        }
    }
}
