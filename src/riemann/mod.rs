//! Exact Riemann-problem solvers.
//!
//! A Riemann problem has two constant states separated by a discontinuity
//! at x = 0; its solution is self-similar in ξ = x/t. This module computes
//! that solution exactly for the models in [`crate::equations`] and exposes
//! it as an immutable [`RiemannSolution`] with an O(1) evaluator.
//!
//! The two convenience entry points cover the supported models:
//!
//! ```
//! use riemann_rs::riemann::{solve_acoustics, solve_traffic};
//! use riemann_rs::equations::AcousticState;
//!
//! let acoustic = solve_acoustics(
//!     AcousticState::new(1.0, 0.0),
//!     AcousticState::zero(),
//!     1.0,
//!     4.0,
//! )?;
//! assert_eq!(acoustic.waves().len(), 2);
//!
//! let traffic = solve_traffic(1.0, 0.0);
//! assert_eq!(traffic.waves().len(), 1);
//! # Ok::<(), riemann_rs::equations::ParameterError>(())
//! ```

mod acoustics;
mod solution;
mod traffic;
mod traits;

pub use solution::{RiemannSolution, Wave, WaveKind, WaveSpeed};
pub use traits::ExactRiemannSolver;

use crate::equations::{AcousticState, Acoustics1D, ParameterError, TrafficLwr};

/// Solve the acoustics Riemann problem for a medium with density `rho0`
/// and bulk modulus `k0`.
///
/// Produces two linear waves at ∓c and the intermediate state from the
/// eigenvector decomposition of the jump.
///
/// # Errors
///
/// Returns [`ParameterError::InvalidParameter`] if `rho0` or `k0` is
/// non-positive, before any computation.
pub fn solve_acoustics(
    q_l: AcousticState,
    q_r: AcousticState,
    rho0: f64,
    k0: f64,
) -> Result<RiemannSolution<AcousticState>, ParameterError> {
    Ok(Acoustics1D::new(rho0, k0)?.solve_riemann(q_l, q_r))
}

/// Solve the LWR traffic Riemann problem for densities (`rho_l`, `rho_r`).
///
/// Never fails: every pair of finite densities produces a solution, with a
/// shock for ρ_r > ρ_l and a (possibly zero-width) rarefaction otherwise.
pub fn solve_traffic(rho_l: f64, rho_r: f64) -> RiemannSolution<f64> {
    TrafficLwr.solve_riemann(rho_l, rho_r)
}
