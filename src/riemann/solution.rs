//! Self-similar Riemann solution representation.
//!
//! A Riemann solution is a fan of waves emanating from the origin of the
//! (x, t) plane, separating constant states. Because the solution depends
//! only on ξ = x/t, it is fully described by the ordered state sequence,
//! the ordered wave list, and (for rarefactions) the profile inside the fan.

/// Type of a propagating wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveKind {
    /// Discontinuity in a linear system; propagates at a fixed
    /// characteristic speed.
    Linear,
    /// Entropy-satisfying discontinuity obeying the Rankine-Hugoniot
    /// jump condition; characteristics impinge on it.
    Shock,
    /// Continuous fan across which characteristics spread apart.
    Rarefaction,
}

/// Speed of a wave: a single value for discontinuities, an ordered pair of
/// edge speeds for a rarefaction fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveSpeed {
    /// Scalar speed of a shock or linear wave.
    Single(f64),
    /// Edge speeds of a rarefaction fan, head ≤ tail.
    Fan {
        /// Left edge of the fan (slowest characteristic).
        head: f64,
        /// Right edge of the fan (fastest characteristic).
        tail: f64,
    },
}

impl WaveSpeed {
    /// Speed of the leftmost edge of this wave.
    pub fn leftmost(&self) -> f64 {
        match *self {
            WaveSpeed::Single(s) => s,
            WaveSpeed::Fan { head, .. } => head,
        }
    }

    /// Speed of the rightmost edge of this wave.
    pub fn rightmost(&self) -> f64 {
        match *self {
            WaveSpeed::Single(s) => s,
            WaveSpeed::Fan { tail, .. } => tail,
        }
    }
}

/// A wave in a Riemann solution: a type tag and a speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    /// Wave type.
    pub kind: WaveKind,
    /// Wave speed (scalar, or edge pair for a fan).
    pub speed: WaveSpeed,
}

impl Wave {
    /// A linear wave at speed `s`.
    pub fn linear(s: f64) -> Self {
        Self {
            kind: WaveKind::Linear,
            speed: WaveSpeed::Single(s),
        }
    }

    /// A shock at speed `s`.
    pub fn shock(s: f64) -> Self {
        Self {
            kind: WaveKind::Shock,
            speed: WaveSpeed::Single(s),
        }
    }

    /// A rarefaction fan spanning [`head`, `tail`].
    pub fn rarefaction(head: f64, tail: f64) -> Self {
        Self {
            kind: WaveKind::Rarefaction,
            speed: WaveSpeed::Fan { head, tail },
        }
    }
}

/// Exact self-similar solution of a Riemann problem.
///
/// Holds the ordered sequence of constant states from left to right
/// (including the outer left and right data as bounds), the ordered wave
/// list (increasing speed), and the rarefaction profile where one exists.
///
/// Constructed atomically by a solve call and immutable afterwards; the
/// evaluator is a pure O(1) function, safe to sample from multiple threads
/// in any order.
///
/// # Example
///
/// ```
/// use riemann_rs::solve_traffic;
///
/// // A green light: heavy traffic expands into an empty road.
/// let solution = solve_traffic(1.0, 0.0);
/// assert!((solution.evaluate(0.0) - 0.5).abs() < 1e-14);
/// ```
#[derive(Clone, Debug)]
pub struct RiemannSolution<S: Copy> {
    states: Vec<S>,
    waves: Vec<Wave>,
    fan: Option<fn(f64) -> S>,
}

impl<S: Copy> RiemannSolution<S> {
    /// Build a solution from states and waves, with no fan interior.
    ///
    /// # Panics
    ///
    /// Panics if `states.len() != waves.len() + 1`.
    pub(crate) fn new(states: Vec<S>, waves: Vec<Wave>) -> Self {
        assert_eq!(states.len(), waves.len() + 1);
        Self {
            states,
            waves,
            fan: None,
        }
    }

    /// Build a solution containing a rarefaction with interior profile
    /// `fan(ξ)`.
    ///
    /// # Panics
    ///
    /// Panics if `states.len() != waves.len() + 1`.
    pub(crate) fn with_fan(states: Vec<S>, waves: Vec<Wave>, fan: fn(f64) -> S) -> Self {
        assert_eq!(states.len(), waves.len() + 1);
        Self {
            states,
            waves,
            fan: Some(fan),
        }
    }

    /// Constant states from left to right, outer data included.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Waves from left to right, in increasing speed order.
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// The left (upstream) data state.
    pub fn left_state(&self) -> S {
        self.states[0]
    }

    /// The right (downstream) data state.
    pub fn right_state(&self) -> S {
        self.states[self.states.len() - 1]
    }

    /// Evaluate the solution at similarity coordinate ξ = x/t.
    ///
    /// Pure and stateless: calls may come in any order, and repeated calls
    /// with the same ξ return bit-identical results.
    ///
    /// Regions between discontinuities are half-open, [sᵢ, sᵢ₊₁): a ξ
    /// exactly on a wave speed resolves to the state on the higher-speed
    /// side. Rarefaction interiors follow the fan profile, which matches
    /// the adjacent constant states at both edges (the solution is
    /// continuous across a fan).
    pub fn evaluate(&self, xi: f64) -> S {
        for (state, wave) in self.states.iter().zip(&self.waves) {
            match wave.speed {
                WaveSpeed::Single(s) => {
                    if xi < s {
                        return *state;
                    }
                }
                WaveSpeed::Fan { head, tail } => {
                    if xi <= head {
                        return *state;
                    }
                    if xi < tail {
                        // A fan with no registered profile degenerates to
                        // a jump at its head.
                        if let Some(profile) = self.fan {
                            return profile(xi);
                        }
                    }
                }
            }
        }
        self.states[self.states.len() - 1]
    }

    /// Evaluate the solution at physical coordinates (x, t).
    ///
    /// For t > 0 this is `evaluate(x/t)`; for t ≤ 0 it returns the initial
    /// data (left state for x < 0, right state otherwise).
    pub fn evaluate_at(&self, x: f64, t: f64) -> S {
        if t > 0.0 {
            self.evaluate(x / t)
        } else if x < 0.0 {
            self.left_state()
        } else {
            self.right_state()
        }
    }

    /// Evaluate the solution at each ξ in `xis`.
    ///
    /// Convenience for plotting collaborators sampling a dense grid.
    pub fn sample(&self, xis: &[f64]) -> Vec<S> {
        xis.iter().map(|&xi| self.evaluate(xi)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    fn two_wave_solution() -> RiemannSolution<f64> {
        RiemannSolution::new(
            vec![1.0, 2.0, 3.0],
            vec![Wave::linear(-1.0), Wave::linear(1.0)],
        )
    }

    #[test]
    fn test_wave_speed_edges() {
        assert_eq!(WaveSpeed::Single(2.0).leftmost(), 2.0);
        assert_eq!(WaveSpeed::Single(2.0).rightmost(), 2.0);

        let fan = WaveSpeed::Fan {
            head: -1.0,
            tail: 0.5,
        };
        assert_eq!(fan.leftmost(), -1.0);
        assert_eq!(fan.rightmost(), 0.5);
    }

    #[test]
    fn test_evaluate_regions() {
        let sol = two_wave_solution();

        assert_eq!(sol.evaluate(-5.0), 1.0);
        assert_eq!(sol.evaluate(0.0), 2.0);
        assert_eq!(sol.evaluate(5.0), 3.0);
    }

    #[test]
    fn test_evaluate_half_open_tie_rule() {
        let sol = two_wave_solution();

        // xi exactly on a wave speed resolves to the higher-speed side
        assert_eq!(sol.evaluate(-1.0), 2.0);
        assert_eq!(sol.evaluate(1.0), 3.0);
    }

    #[test]
    fn test_evaluate_fan_interior() {
        let sol = RiemannSolution::with_fan(
            vec![1.0, 0.0],
            vec![Wave::rarefaction(-1.0, 1.0)],
            |xi| 0.5 * (1.0 - xi),
        );

        assert_eq!(sol.evaluate(-2.0), 1.0);
        assert!((sol.evaluate(0.0) - 0.5).abs() < TOL);
        assert_eq!(sol.evaluate(2.0), 0.0);

        // Continuous at both fan edges
        assert!((sol.evaluate(-1.0) - 1.0).abs() < TOL);
        assert!((sol.evaluate(1.0) - 0.0).abs() < TOL);
    }

    #[test]
    fn test_evaluate_at_initial_data() {
        let sol = two_wave_solution();

        assert_eq!(sol.evaluate_at(-0.1, 0.0), 1.0);
        assert_eq!(sol.evaluate_at(0.1, 0.0), 3.0);
        assert_eq!(sol.evaluate_at(0.5, 1.0), sol.evaluate(0.5));
    }

    #[test]
    fn test_sample_matches_evaluate() {
        let sol = two_wave_solution();
        let xis = [-2.0, -1.0, 0.0, 1.0, 2.0];

        let sampled = sol.sample(&xis);
        for (value, &xi) in sampled.iter().zip(&xis) {
            assert_eq!(*value, sol.evaluate(xi));
        }
    }

    #[test]
    #[should_panic]
    fn test_mismatched_states_and_waves_panics() {
        let _ = RiemannSolution::new(vec![1.0, 2.0], vec![]);
    }
}
