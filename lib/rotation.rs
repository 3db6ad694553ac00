//! Single-qubit rotation matrices and matrix helpers.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::{ One, Zero };
use crate::c;

/// Rotation by `theta` about the Bloch-sphere y-axis:
/// ```text
/// [ cos(θ/2)  -sin(θ/2) ]
/// [ sin(θ/2)   cos(θ/2) ]
/// ```
pub fn Ry(theta: f64) -> nd::Array2<C64> {
    let (s, c) = (theta / 2.0).sin_cos();
    nd::array![
        [c!(c), c!(-s)],
        [c!(s), c!(c) ],
    ]
}

/// Rotation by `theta` about the Bloch-sphere z-axis:
/// ```text
/// [ exp(-i θ/2)      0      ]
/// [      0      exp(i θ/2)  ]
/// ```
pub fn Rz(theta: f64) -> nd::Array2<C64> {
    let half = theta / 2.0;
    nd::array![
        [c!(i -half).exp(), C64::zero()       ],
        [C64::zero(),       c!(i half).exp()  ],
    ]
}

/// Conjugate transpose of a matrix.
pub fn dagger<S>(M: &nd::ArrayBase<S, nd::Ix2>) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    M.t().mapv(|m| m.conj())
}

/// Return `true` if `M M†` is the identity to within `tol` in every element.
pub fn is_unitary<S>(M: &nd::ArrayBase<S, nd::Ix2>, tol: f64) -> bool
where S: nd::Data<Elem = C64>
{
    let (n, m) = M.dim();
    if n != m { return false; }
    M.dot(&dagger(M))
        .indexed_iter()
        .all(|((i, j), p)| {
            let target = if i == j { C64::one() } else { C64::zero() };
            (p - target).norm() <= tol
        })
}

#[cfg(test)]
mod test {
    use std::f64::consts::{ FRAC_PI_2, PI, TAU };
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn identities_at_zero() {
        let id: nd::Array2<C64> = nd::Array2::eye(2);
        assert_eq!(Ry(0.0), id);
        assert_eq!(Rz(0.0), id);
    }

    #[test]
    fn ry_pi_swaps_poles() {
        // Ry(π) |g⟩ = |e⟩
        let psi = Ry(PI).dot(&nd::array![C64::one(), C64::zero()]);
        assert_relative_eq!(psi[0].norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(psi[1].re, 1.0, epsilon = 1e-12);
        assert!(is_unitary(&Ry(FRAC_PI_2), 1e-12));
    }

    #[test]
    fn rz_full_turn_is_minus_identity() {
        let m = Rz(TAU);
        assert_relative_eq!(m[[0, 0]].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[[1, 1]].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[[0, 0]].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_is_negative_angle() {
        let theta = 0.7;
        let prod = Ry(theta).dot(&Ry(-theta));
        assert!(is_unitary(&prod, 1e-12));
        assert_relative_eq!(prod[[0, 0]].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(prod[[0, 1]].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn detects_non_unitary() {
        let m = nd::array![[C64::one(), C64::one()], [C64::zero(), C64::one()]];
        assert!(!is_unitary(&m, 1e-9));
        let rect: nd::Array2<C64> = nd::Array2::zeros((2, 3));
        assert!(!is_unitary(&rect, 1e-9));
    }
}
