//! LWR traffic flow equation.
//!
//! The Lighthill-Whitham-Richards model, a scalar conservation law with
//! concave flux:
//!
//! ∂ρ/∂t + ∂(ρ(1 − ρ))/∂x = 0
//!
//! where ρ is the (normalized) vehicle density: ρ = 0 is an empty road,
//! ρ = 1 bumper-to-bumper traffic. Cars move at speed 1 − ρ, so the flux
//! ρ(1 − ρ) vanishes at both extremes and peaks at ρ = 1/2.

use super::HyperbolicModel;

/// LWR traffic flow with the quadratic flux f(ρ) = ρ(1 − ρ).
///
/// No external parameters: the flux and its derivative f′(ρ) = 1 − 2ρ are
/// fixed. Densities outside [0, 1] are not physically meaningful but are
/// accepted numerically; the flux formula stays well-defined and callers
/// are responsible for staying in range.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrafficLwr;

impl TrafficLwr {
    /// Characteristic speed f′(ρ) = 1 − 2ρ.
    ///
    /// Positive in light traffic (ρ < 1/2), negative in heavy traffic.
    pub fn characteristic_speed(&self, rho: f64) -> f64 {
        1.0 - 2.0 * rho
    }

    /// Rankine-Hugoniot shock speed for the jump (ρ_l, ρ_r):
    ///
    /// s = (f(ρ_l) − f(ρ_r)) / (ρ_l − ρ_r)
    ///
    /// For equal states the jump condition degenerates; the characteristic
    /// speed is returned so degenerate waves carry a well-defined speed.
    pub fn shock_speed(&self, rho_l: f64, rho_r: f64) -> f64 {
        if rho_l == rho_r {
            return self.characteristic_speed(rho_l);
        }
        let f = |rho: f64| rho * (1.0 - rho);
        (f(rho_l) - f(rho_r)) / (rho_l - rho_r)
    }

    /// Density inside a rarefaction fan at similarity coordinate ξ.
    ///
    /// Solving f′(ρ̃(ξ)) = ξ for the quadratic flux gives ρ̃(ξ) = (1 − ξ)/2.
    pub fn fan_density(xi: f64) -> f64 {
        0.5 * (1.0 - xi)
    }
}

impl HyperbolicModel for TrafficLwr {
    type State = f64;

    const N_WAVES: usize = 1;

    fn flux(&self, q: &f64) -> f64 {
        q * (1.0 - q)
    }

    fn characteristic_speeds(&self, q: &f64) -> Vec<f64> {
        vec![self.characteristic_speed(*q)]
    }
}
