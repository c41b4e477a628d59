//! # riemann-rs
//!
//! Exact Riemann-problem solvers for 1D hyperbolic conservation laws.
//!
//! A Riemann problem is an initial-value problem with two constant states
//! separated by a single discontinuity at the origin; its solution depends
//! only on the similarity coordinate ξ = x/t. This crate computes that
//! solution exactly (intermediate states, wave speeds, wave types) for two
//! model equations and exposes an O(1) evaluator ξ ↦ q(ξ).
//!
//! Building blocks:
//! - Model equations (linear acoustics, LWR traffic)
//! - Wave decomposition (eigenvector split, shock/rarefaction classification)
//! - Similarity-solution evaluation for plotting and characteristic tracing
//!
//! # Example
//! ```
//! use riemann_rs::{solve_traffic, WaveKind};
//!
//! // Cars running into a jam: a shock moving upstream.
//! let solution = solve_traffic(0.2, 1.0);
//! assert_eq!(solution.waves()[0].kind, WaveKind::Shock);
//! assert!((solution.evaluate(-0.3) - 0.2).abs() < 1e-14);
//! ```

pub mod equations;
pub mod riemann;

// Re-export main types for convenience
pub use equations::{AcousticState, Acoustics1D, HyperbolicModel, ParameterError, TrafficLwr};
pub use riemann::{
    ExactRiemannSolver, RiemannSolution, Wave, WaveKind, WaveSpeed, solve_acoustics, solve_traffic,
};
