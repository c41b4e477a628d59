//! Linear acoustics equations.
//!
//! The 1D linear acoustics system (linearized Euler equations):
//!
//! ∂p/∂t + K₀ ∂u/∂x = 0
//! ∂u/∂t + (1/ρ₀) ∂p/∂x = 0
//!
//! where:
//! - p = pressure perturbation
//! - u = velocity
//! - ρ₀ = unperturbed medium density
//! - K₀ = bulk modulus of compressibility
//!
//! The coefficient matrix has eigenvalues ∓c with c = √(K₀/ρ₀) and right
//! eigenvectors r₁ = (−Z, 1), r₂ = (Z, 1), where Z = √(K₀ρ₀) is the acoustic
//! impedance.

use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

use super::HyperbolicModel;

/// Error type for model parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Non-physical medium parameters.
    #[error("invalid medium parameters: rho0 = {rho0}, K0 = {k0} (both must be positive)")]
    InvalidParameter {
        /// Rejected density.
        rho0: f64,
        /// Rejected bulk modulus.
        k0: f64,
    },
}

/// Acoustic state: (p, u).
///
/// Pressure perturbation and velocity, the primitive variables of the
/// linear acoustics system. Immutable value type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AcousticState {
    /// Pressure perturbation p
    pub p: f64,
    /// Velocity u
    pub u: f64,
}

impl AcousticState {
    /// Create a new acoustic state.
    pub fn new(p: f64, u: f64) -> Self {
        Self { p, u }
    }

    /// The zero (undisturbed) state.
    pub fn zero() -> Self {
        Self { p: 0.0, u: 0.0 }
    }

    /// Convert to array representation [p, u].
    pub fn to_array(&self) -> [f64; 2] {
        [self.p, self.u]
    }

    /// Create from array representation [p, u].
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self {
            p: arr[0],
            u: arr[1],
        }
    }
}

impl Add for AcousticState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            p: self.p + other.p,
            u: self.u + other.u,
        }
    }
}

impl Sub for AcousticState {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            p: self.p - other.p,
            u: self.u - other.u,
        }
    }
}

impl Mul<f64> for AcousticState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            p: self.p * scalar,
            u: self.u * scalar,
        }
    }
}

impl Mul<AcousticState> for f64 {
    type Output = AcousticState;

    fn mul(self, state: AcousticState) -> AcousticState {
        state * self
    }
}

impl Neg for AcousticState {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            p: -self.p,
            u: -self.u,
        }
    }
}

/// 1D linear acoustics in a homogeneous medium.
///
/// Carries the medium parameters (ρ₀, K₀) and the derived sound speed and
/// impedance. Construction validates ρ₀ > 0 and K₀ > 0; with that invariant
/// the eigenvector matrix is always invertible, so the Riemann solve has no
/// failure path.
///
/// # Example
///
/// ```
/// use riemann_rs::equations::Acoustics1D;
///
/// let medium = Acoustics1D::new(1.0, 4.0)?;
/// assert!((medium.sound_speed() - 2.0).abs() < 1e-14);
/// assert!((medium.impedance() - 2.0).abs() < 1e-14);
/// # Ok::<(), riemann_rs::equations::ParameterError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Acoustics1D {
    rho0: f64,
    k0: f64,
}

impl Acoustics1D {
    /// Create an acoustics model for a medium with density `rho0` and bulk
    /// modulus `k0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if either parameter is
    /// non-positive (or NaN), before any computation.
    pub fn new(rho0: f64, k0: f64) -> Result<Self, ParameterError> {
        if rho0 > 0.0 && k0 > 0.0 {
            Ok(Self { rho0, k0 })
        } else {
            Err(ParameterError::InvalidParameter { rho0, k0 })
        }
    }

    /// Medium density ρ₀.
    pub fn rho0(&self) -> f64 {
        self.rho0
    }

    /// Bulk modulus K₀.
    pub fn bulk_modulus(&self) -> f64 {
        self.k0
    }

    /// Sound speed c = √(K₀/ρ₀).
    pub fn sound_speed(&self) -> f64 {
        (self.k0 / self.rho0).sqrt()
    }

    /// Acoustic impedance Z = √(K₀ρ₀).
    ///
    /// Governs the ratio of pressure jump to velocity jump across a wave.
    pub fn impedance(&self) -> f64 {
        (self.k0 * self.rho0).sqrt()
    }

    /// Right eigenvectors of the coefficient matrix.
    ///
    /// r₁ = (−Z, 1) for λ₁ = −c, r₂ = (Z, 1) for λ₂ = +c.
    pub fn right_eigenvectors(&self) -> [AcousticState; 2] {
        let z = self.impedance();
        [AcousticState::new(-z, 1.0), AcousticState::new(z, 1.0)]
    }

    /// Decompose a state jump into eigenvector components.
    ///
    /// Solves R·α = Δq in closed form:
    ///
    /// α₁ = (−Δp + ZΔu) / (2Z)
    /// α₂ = ( Δp + ZΔu) / (2Z)
    pub fn decompose(&self, dq: AcousticState) -> [f64; 2] {
        let z = self.impedance();
        let inv_2z = 0.5 / z;
        [
            inv_2z * (-dq.p + z * dq.u),
            inv_2z * (dq.p + z * dq.u),
        ]
    }
}

impl HyperbolicModel for Acoustics1D {
    type State = AcousticState;

    const N_WAVES: usize = 2;

    fn flux(&self, q: &AcousticState) -> AcousticState {
        // f(p, u) = (K₀u, p/ρ₀)
        AcousticState::new(self.k0 * q.u, q.p / self.rho0)
    }

    fn characteristic_speeds(&self, _q: &AcousticState) -> Vec<f64> {
        // The system is linear: speeds are state-independent.
        let c = self.sound_speed();
        vec![-c, c]
    }
}
