//! Model equation abstractions.
//!
//! Provides a trait-based interface for the hyperbolic conservation laws
//! handled by this crate:
//!
//! ∂q/∂t + ∂f(q)/∂x = 0
//!
//! where q is the state and f is the flux function. Implementations carry
//! their physical parameters and expose the flux and its characteristic
//! structure; the exact Riemann solvers in [`crate::riemann`] build on this.

mod acoustics;
mod traffic;

pub use acoustics::{AcousticState, Acoustics1D, ParameterError};
pub use traffic::TrafficLwr;

/// A 1D hyperbolic conservation law.
///
/// Abstracts over scalar equations (LWR traffic) and linear systems
/// (acoustics). Implementations define their own state representation:
/// `f64` for scalar laws, a small value struct for systems.
///
/// # Example
///
/// ```
/// use riemann_rs::equations::{HyperbolicModel, TrafficLwr};
///
/// let lwr = TrafficLwr;
/// let f = lwr.flux(&0.25);           // ρ(1 - ρ) = 0.1875
/// assert!((f - 0.1875).abs() < 1e-14);
/// ```
pub trait HyperbolicModel: Clone + Send + Sync {
    /// State representation for this model.
    ///
    /// - `f64` for scalar equations (traffic density)
    /// - [`AcousticState`] for the 2×2 acoustics system
    type State: Copy + Send + Sync;

    /// Number of waves in the exact Riemann solution.
    ///
    /// - 1 for scalar equations
    /// - 2 for the acoustics system
    const N_WAVES: usize;

    /// Compute the physical flux f(q).
    ///
    /// For traffic: f(ρ) = ρ(1 − ρ)
    /// For acoustics: f(p, u) = (K₀u, p/ρ₀)
    ///
    /// The flux vector has the same shape as the state.
    fn flux(&self, q: &Self::State) -> Self::State;

    /// Characteristic speeds (eigenvalues of the flux Jacobian) at state q,
    /// ordered from slowest to fastest.
    ///
    /// For traffic: [1 − 2ρ]
    /// For acoustics: [−c, +c]
    ///
    /// These are the speeds at which information propagates; the external
    /// characteristic-plotting collaborator consumes them directly.
    fn characteristic_speeds(&self, q: &Self::State) -> Vec<f64>;

    /// Maximum absolute characteristic speed |λ_max| at state q.
    fn max_wave_speed(&self, q: &Self::State) -> f64 {
        self.characteristic_speeds(q)
            .iter()
            .fold(0.0_f64, |m, s| m.max(s.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_implements_model() {
        let lwr = TrafficLwr;
        assert_eq!(TrafficLwr::N_WAVES, 1);

        let speeds = lwr.characteristic_speeds(&0.5);
        assert_eq!(speeds.len(), 1);
        assert!(speeds[0].abs() < 1e-14); // f'(1/2) = 0
    }

    #[test]
    fn test_acoustics_implements_model() {
        let medium = Acoustics1D::new(1.0, 4.0).unwrap();
        assert_eq!(Acoustics1D::N_WAVES, 2);

        // c = sqrt(4/1) = 2, speeds ordered slowest to fastest
        let speeds = medium.characteristic_speeds(&AcousticState::new(1.0, 0.0));
        assert!((speeds[0] - (-2.0)).abs() < 1e-14);
        assert!((speeds[1] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_max_wave_speed_default() {
        let medium = Acoustics1D::new(1.0, 4.0).unwrap();
        let q = AcousticState::new(0.0, 0.0);
        assert!((medium.max_wave_speed(&q) - 2.0).abs() < 1e-14);

        let lwr = TrafficLwr;
        assert!((lwr.max_wave_speed(&1.0) - 1.0).abs() < 1e-14);
    }
}
