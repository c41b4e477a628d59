//! Exact Riemann solver for linear acoustics.
//!
//! The system is linear with constant coefficients, so the solution is a
//! characteristic decomposition: the jump Δq = q_r − q_l splits into
//! eigenvector components
//!
//! Δq = α₁r₁ + α₂r₂,   r₁ = (−Z, 1), r₂ = (Z, 1)
//!
//! giving exactly two waves at the fixed speeds ∓c and one intermediate
//! state q_m = q_l + α₁r₁ (equivalently q_r − α₂r₂).

use crate::equations::{AcousticState, Acoustics1D};

use super::{ExactRiemannSolver, RiemannSolution, Wave};

impl ExactRiemannSolver for Acoustics1D {
    fn solve_riemann(
        &self,
        q_l: AcousticState,
        q_r: AcousticState,
    ) -> RiemannSolution<AcousticState> {
        let c = self.sound_speed();

        // Z > 0 by the construction invariant, so the eigenvector system
        // is always solvable.
        let [alpha1, _] = self.decompose(q_r - q_l);
        let [r1, _] = self.right_eigenvectors();
        let q_m = q_l + r1 * alpha1;

        RiemannSolution::new(
            vec![q_l, q_m, q_r],
            vec![Wave::linear(-c), Wave::linear(c)],
        )
    }

    fn name(&self) -> &'static str {
        "acoustics"
    }
}
