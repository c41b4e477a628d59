//! Trait-based exact Riemann solver abstraction.
//!
//! Both physical models share one solve contract; callers written against
//! the trait pick up further models (e.g. heterogeneous-media acoustics)
//! without change.
//!
//! # Example
//! ```
//! use riemann_rs::{ExactRiemannSolver, TrafficLwr};
//!
//! let solver = TrafficLwr;
//! let solution = solver.solve_riemann(0.2, 1.0);
//! assert_eq!(solution.waves().len(), 1);
//! ```

use super::RiemannSolution;
use crate::equations::HyperbolicModel;

/// Exact solver for the Riemann problem of a hyperbolic model.
///
/// Given two constant states separated by a discontinuity at the origin,
/// `solve_riemann` computes the full self-similar solution structure.
///
/// # Implementation Notes
///
/// - Solving is a pure function of its inputs: no I/O, no shared state,
///   safe to call from multiple threads.
/// - Waves must be emitted left to right in increasing speed order, with
///   `states().len() == waves().len() + 1`.
/// - Every pair of finite inputs must produce a solution, degenerate
///   (zero-strength) waves included; parameter validation belongs to model
///   construction, not to the solve.
pub trait ExactRiemannSolver: HyperbolicModel {
    /// Solve the Riemann problem with data (`q_l`, `q_r`).
    fn solve_riemann(&self, q_l: Self::State, q_r: Self::State) -> RiemannSolution<Self::State>;

    /// Human-readable model name for debugging and logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{AcousticState, Acoustics1D, TrafficLwr};

    #[test]
    fn test_solver_names() {
        let medium = Acoustics1D::new(1.0, 1.0).unwrap();
        assert_eq!(medium.name(), "acoustics");
        assert_eq!(TrafficLwr.name(), "traffic-lwr");
    }

    #[test]
    fn test_wave_and_state_counts() {
        let medium = Acoustics1D::new(1.0, 4.0).unwrap();
        let sol = medium.solve_riemann(AcousticState::new(1.0, 0.0), AcousticState::zero());
        assert_eq!(sol.states().len(), sol.waves().len() + 1);
        assert_eq!(sol.waves().len(), Acoustics1D::N_WAVES);

        let sol = TrafficLwr.solve_riemann(0.4, 0.6);
        assert_eq!(sol.states().len(), sol.waves().len() + 1);
        assert_eq!(sol.waves().len(), TrafficLwr::N_WAVES);
    }
}
