//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::poly::polynomial::Polynomial;
use num_traits::{One, Zero};

// Quarter-step coefficients are exact in binary, so sums and products
// stay well inside the comparison tolerance.
fn small_coeff() -> impl Strategy<Value = f64> {
    (-100i32..100i32).prop_map(|n| f64::from(n) / 4.)
}

// Raw inputs, frequently with leading zeros
fn raw_coeffs() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(prop_oneof![Just(0.), small_coeff()], 1..=6)
}

// Polynomials of degree 0-4
fn small_poly() -> impl Strategy<Value = Polynomial> {
    raw_coeffs().prop_map(|c| Polynomial::new(&c).unwrap())
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    #[test]
    fn normalization_is_idempotent(c in raw_coeffs()) {
        let p = Polynomial::new(&c).unwrap();
        prop_assert_eq!(Polynomial::new(&p.coefficients()).unwrap(), p.clone());
        prop_assert!(p.ncoeffs() == 1 || p.coefficients()[0] != 0.);
    }

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn add_identity(a in small_poly()) {
        prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
        prop_assert_eq!(Polynomial::zero() + a.clone(), a);
    }

    #[test]
    fn additive_inverse(a in small_poly()) {
        prop_assert!((&a - &a).is_zero());
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn negation_involution(a in small_poly()) {
        prop_assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn sub_is_add_of_negation(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_identity(a in small_poly()) {
        prop_assert_eq!(&a * &Polynomial::one(), a.clone());
        prop_assert_eq!(Polynomial::one() * a.clone(), a);
    }

    #[test]
    fn mul_zero(a in small_poly()) {
        let zero = Polynomial::zero();
        prop_assert_eq!((&a * &zero).coefficients(), vec![0.]);
        prop_assert_eq!((&zero * &a).coefficients(), vec![0.]);
        prop_assert!((&a * 0.).is_zero());
        prop_assert!((0. * &a).is_zero());
    }

    #[test]
    fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        // a * (b + c) = a * b + a * c
        let left = &a * &(&b + &c);
        let right = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scalar_mul_commutes(a in small_poly(), k in small_coeff()) {
        prop_assert_eq!(&a * k, k * &a);
        prop_assert_eq!(&a * k, &a * &Polynomial::constant(k));
    }
}
