//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quadra_rings::{IBig, RealRing, Ring};

    use crate::poly2::Poly2;
    use crate::solve::Roots;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating polynomials with 1-3 coefficients
    fn small_poly() -> impl Strategy<Value = Poly2<IBig>> {
        proptest::collection::vec(small_coeff(), 1..=3).prop_map(int_poly)
    }

    fn int_poly(coeffs: Vec<i64>) -> Poly2<IBig> {
        coeffs.into_iter().map(IBig::from).collect()
    }

    // Strategy for quadratics with a non-zero leading coefficient
    fn proper_quadratic() -> impl Strategy<Value = Poly2<IBig>> {
        (small_coeff(), small_coeff(), small_coeff())
            .prop_filter("leading coefficient must be non-zero", |(a, _, _)| *a != 0)
            .prop_map(|(a, b, c)| int_poly(vec![a, b, c]))
    }

    fn coeff_or_zero(p: &Poly2<IBig>, exp: usize) -> IBig {
        p.coeff(exp).cloned().unwrap_or(IBig::ZERO)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_merges_coefficients(a in small_poly(), b in small_poly()) {
            let sum = &a + &b;
            for exp in 0..3 {
                prop_assert_eq!(coeff_or_zero(&sum, exp), coeff_or_zero(&a, exp) + coeff_or_zero(&b, exp));
            }
            prop_assert_eq!(sum.len(), a.len().max(b.len()));
        }

        #[test]
        fn poly_sub_merges_coefficients(a in small_poly(), b in small_poly()) {
            let diff = &a - &b;
            for exp in 0..3 {
                prop_assert_eq!(coeff_or_zero(&diff, exp), coeff_or_zero(&a, exp) - coeff_or_zero(&b, exp));
            }
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            let diff = &a - &a;
            prop_assert!(diff.terms().all(|(_, c)| c.is_zero()));
            prop_assert_eq!(diff.to_string(), "");
        }

        #[test]
        fn poly_eval_add_same_length(
            coeffs in proptest::collection::vec((small_coeff(), small_coeff()), 1..=3),
            x in small_coeff()
        ) {
            // Equal lengths keep the positional reading aligned
            let (ac, bc): (Vec<i64>, Vec<i64>) = coeffs.into_iter().unzip();
            let a = int_poly(ac);
            let b = int_poly(bc);
            let sum = &a + &b;
            let x = IBig::from(x);
            prop_assert_eq!(sum.evaluate(&x).unwrap(), a.evaluate(&x).unwrap() + b.evaluate(&x).unwrap());
        }

        #[test]
        fn poly_eval_real_matches_exact_at_integers(a in small_poly(), x in small_coeff()) {
            let exact = a.evaluate(&IBig::from(x)).unwrap().to_real().unwrap();
            #[allow(clippy::cast_precision_loss)]
            let real = a.evaluate_real(x as f64).unwrap();
            prop_assert_eq!(exact, real);
        }

        #[test]
        fn poly_display_never_has_dangling_operator(a in small_poly()) {
            let rendered = a.to_string();
            prop_assert!(!rendered.ends_with(' '));
            prop_assert!(!rendered.starts_with(' '));
            prop_assert!(!rendered.contains("+ -"));
        }

        #[test]
        fn solve_real_roots_vanish(p in proper_quadratic()) {
            let roots = p.solve().unwrap();
            let (a, b, c) = p.positional().unwrap().abc();
            let (a, b, c) = (a.to_real().unwrap(), b.to_real().unwrap(), c.to_real().unwrap());
            if let Some(real) = roots.real() {
                for r in real {
                    let y = a * r * r + b * r + c;
                    prop_assert!(y.abs() < 1e-6 * (1.0 + a.abs() + b.abs() + c.abs()) * (1.0 + r * r));
                }
            } else {
                prop_assert!(matches!(roots, Roots::Complex(_)));
                prop_assert!(b * b - 4.0 * a * c < 0.0);
            }
        }
    }
}
