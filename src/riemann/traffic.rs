//! Exact Riemann solver for LWR traffic.
//!
//! The flux is concave, so the entropy condition reduces to comparing the
//! two densities: a density increase (ρ_r > ρ_l) steepens into a shock at
//! the Rankine-Hugoniot speed, a density decrease spreads into a
//! rarefaction fan spanning [f′(ρ_l), f′(ρ_r)].
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics" (scalar conservation laws chapter).

use crate::equations::TrafficLwr;

use super::{ExactRiemannSolver, RiemannSolution, Wave};

impl ExactRiemannSolver for TrafficLwr {
    fn solve_riemann(&self, rho_l: f64, rho_r: f64) -> RiemannSolution<f64> {
        if rho_r > rho_l {
            // Characteristics impinge (f'(rho_l) > f'(rho_r)): shock.
            let s = self.shock_speed(rho_l, rho_r);
            RiemannSolution::new(vec![rho_l, rho_r], vec![Wave::shock(s)])
        } else {
            // Characteristics spread, or equal states: rarefaction.
            // Equal states give a zero-width fan at f'(rho_l); the
            // evaluator needs no special case for it.
            let head = self.characteristic_speed(rho_l);
            let tail = self.characteristic_speed(rho_r);
            RiemannSolution::with_fan(
                vec![rho_l, rho_r],
                vec![Wave::rarefaction(head, tail)],
                TrafficLwr::fan_density,
            )
        }
    }

    fn name(&self) -> &'static str {
        "traffic-lwr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riemann::{WaveKind, WaveSpeed};

    const TOL: f64 = 1e-14;

    #[test]
    fn test_shock_example() {
        // rho_l = 0.2, rho_r = 1.0 => s = (0.16 - 0) / (0.2 - 1) = -0.2
        let sol = TrafficLwr.solve_riemann(0.2, 1.0);

        assert_eq!(sol.waves()[0].kind, WaveKind::Shock);
        assert_eq!(sol.waves()[0].speed, WaveSpeed::Single(-0.2));

        assert!((sol.evaluate(-0.3) - 0.2).abs() < TOL);
        assert!((sol.evaluate(0.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_rarefaction_example() {
        // rho_l = 1, rho_r = 0 => fan spans [f'(1), f'(0)] = [-1, 1]
        let sol = TrafficLwr.solve_riemann(1.0, 0.0);

        assert_eq!(sol.waves()[0].kind, WaveKind::Rarefaction);
        assert_eq!(
            sol.waves()[0].speed,
            WaveSpeed::Fan {
                head: -1.0,
                tail: 1.0
            }
        );

        assert!((sol.evaluate(-1.0) - 1.0).abs() < TOL);
        assert!((sol.evaluate(0.0) - 0.5).abs() < TOL);
        assert!((sol.evaluate(1.0) - 0.0).abs() < TOL);
    }

    #[test]
    fn test_rarefaction_continuous_at_fan_edges() {
        let sol = TrafficLwr.solve_riemann(0.9, 0.1);
        let head = TrafficLwr.characteristic_speed(0.9);
        let tail = TrafficLwr.characteristic_speed(0.1);

        let eps = 1e-9;
        assert!((sol.evaluate(head - eps) - sol.evaluate(head + eps)).abs() < 1e-8);
        assert!((sol.evaluate(tail - eps) - sol.evaluate(tail + eps)).abs() < 1e-8);
    }

    #[test]
    fn test_entropy_classification() {
        for i in 0..=10 {
            for j in 0..=10 {
                let rho_l = i as f64 / 10.0;
                let rho_r = j as f64 / 10.0;
                let sol = TrafficLwr.solve_riemann(rho_l, rho_r);

                let expected = if rho_r > rho_l {
                    WaveKind::Shock
                } else {
                    WaveKind::Rarefaction
                };
                assert_eq!(
                    sol.waves()[0].kind,
                    expected,
                    "misclassified ({}, {})",
                    rho_l,
                    rho_r
                );
            }
        }
    }

    #[test]
    fn test_degenerate_equal_states() {
        let sol = TrafficLwr.solve_riemann(0.3, 0.3);

        // Zero-width fan at f'(0.3) = 0.4
        let s = TrafficLwr.characteristic_speed(0.3);
        assert_eq!(
            sol.waves()[0].speed,
            WaveSpeed::Fan { head: s, tail: s }
        );

        for &xi in &[-1.0, 0.0, s, 1.0] {
            assert_eq!(sol.evaluate(xi), 0.3);
        }
    }

    #[test]
    fn test_out_of_range_densities_accepted() {
        // Not physically meaningful, but the flux formula is well-defined
        // and the solver must not reject them.
        let sol = TrafficLwr.solve_riemann(-0.5, 1.5);
        assert_eq!(sol.waves()[0].kind, WaveKind::Shock);
        assert!(sol.evaluate(0.0).is_finite());
    }
}
