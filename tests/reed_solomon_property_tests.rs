//! Property-based tests for GF(2^8) arithmetic and Reed-Solomon coding
//!
//! These tests use proptest to validate field laws, polynomial division, and
//! encode/corrupt/decode behaviour across randomly generated inputs.

mod common;

use common::corrupt;
use proptest::prelude::*;
use rsfec::reed_solomon::{galois_field, poly, Gf256};
use rsfec::{Codec, DecodeOutcome};

proptest! {
    /// Property: Gf256 multiplication is commutative: a * b = b * a
    #[test]
    fn prop_galois_multiplication_commutative(a in any::<u8>(), b in any::<u8>()) {
        let ga = Gf256::new(a);
        let gb = Gf256::new(b);

        prop_assert_eq!(ga * gb, gb * ga);
    }

    /// Property: Gf256 multiplication is associative: (a * b) * c = a * (b * c)
    #[test]
    fn prop_galois_multiplication_associative(
        a in any::<u8>(),
        b in any::<u8>(),
        c in any::<u8>(),
    ) {
        let (ga, gb, gc) = (Gf256::new(a), Gf256::new(b), Gf256::new(c));

        prop_assert_eq!((ga * gb) * gc, ga * (gb * gc));
    }

    /// Property: Gf256 distributive law: a * (b + c) = (a * b) + (a * c)
    #[test]
    fn prop_galois_distributive(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let (ga, gb, gc) = (Gf256::new(a), Gf256::new(b), Gf256::new(c));

        prop_assert_eq!(ga * (gb + gc), (ga * gb) + (ga * gc));
    }

    /// Property: a * a^(-1) = 1 for a ≠ 0
    #[test]
    fn prop_galois_multiplicative_inverse(a in 1u8..=255) {
        let ga = Gf256::new(a);
        let inv = ga.inverse().unwrap();

        prop_assert_eq!(ga * inv, Gf256::ONE);
    }

    /// Property: (a / b) * b = a for b ≠ 0
    #[test]
    fn prop_galois_division_consistency(a in any::<u8>(), b in 1u8..=255) {
        let ga = Gf256::new(a);
        let gb = Gf256::new(b);

        prop_assert_eq!(ga.checked_div(gb).unwrap() * gb, ga);
    }

    /// Property: pow agrees with repeated multiplication
    #[test]
    fn prop_galois_power_consistency(a in any::<u8>(), power in 0usize..=600) {
        let ga = Gf256::new(a);

        let mut manual = Gf256::ONE;
        for _ in 0..power {
            manual *= ga;
        }

        prop_assert_eq!(ga.pow(power), manual);
    }

    /// Property: log(a * b) = log(a) + log(b) mod 255
    #[test]
    fn prop_galois_log_multiplication(a in 1u8..=255, b in 1u8..=255) {
        let ga = Gf256::new(a);
        let gb = Gf256::new(b);

        let log_a = ga.log().unwrap() as usize;
        let log_b = gb.log().unwrap() as usize;
        let log_product = (ga * gb).log().unwrap() as usize;

        prop_assert_eq!(log_product, (log_a + log_b) % 255);
    }

    /// Property: dividend = quotient * divisor + remainder
    #[test]
    fn prop_poly_division_identity(
        dividend in proptest::collection::vec(any::<u8>(), 1..64),
        mut divisor in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        divisor[0] |= 1;
        let (quotient, remainder) = poly::divide(&dividend, &divisor).unwrap();
        prop_assert_eq!(remainder.len(), divisor.len() - 1);

        let rebuilt = poly::add(&poly::mul(&quotient, &divisor), &remainder);
        prop_assert_eq!(poly::trim_leading_zeros(&rebuilt), poly::trim_leading_zeros(&dividend));
    }

    /// Property: eval(p * q, x) = eval(p, x) * eval(q, x)
    #[test]
    fn prop_poly_eval_is_multiplicative(
        p in proptest::collection::vec(any::<u8>(), 1..20),
        q in proptest::collection::vec(any::<u8>(), 1..20),
        x in any::<u8>(),
    ) {
        let gf = galois_field();
        prop_assert_eq!(
            poly::eval(&poly::mul(&p, &q), x),
            gf.mul(poly::eval(&p, x), poly::eval(&q, x))
        );
    }

    /// Property: decode(encode(m)) = (m, Clean)
    #[test]
    fn prop_round_trip_clean(
        nsym in 1usize..=50,
        message in proptest::collection::vec(any::<u8>(), 0..=205),
    ) {
        let codec = Codec::new(nsym).unwrap();
        let codeword = codec.encode(&message).unwrap();

        let (decoded, outcome) = codec.decode(&codeword).unwrap().into_parts();
        prop_assert_eq!(decoded, message);
        prop_assert_eq!(outcome, DecodeOutcome::Clean);
    }

    /// Property: up to ⌊nsym/2⌋ byte errors are always repaired
    #[test]
    fn prop_corrects_within_capacity(
        nsym in 2usize..=40,
        message in proptest::collection::vec(any::<u8>(), 0..=215),
        errors_seed in any::<u64>(),
    ) {
        let codec = Codec::new(nsym).unwrap();
        let codeword = codec.encode(&message).unwrap();

        let mut rng = common::rng(errors_seed);
        let errors = 1 + (errors_seed as usize) % (nsym / 2);
        let (noisy, positions) = corrupt(&codeword, errors, &mut rng);

        let decoded = codec.decode(&noisy).unwrap();
        prop_assert_eq!(&decoded.message, &message);
        prop_assert_eq!(decoded.outcome, DecodeOutcome::Corrected { errors });
        prop_assert_eq!(decoded.error_positions, positions);
    }

    /// Property: arbitrary input never panics and never yields an invalid codeword
    #[test]
    fn prop_arbitrary_input_is_safe(
        nsym in 1usize..=32,
        received in proptest::collection::vec(any::<u8>(), 32..=255),
    ) {
        let codec = Codec::new(nsym).unwrap();

        match codec.decode(&received) {
            Ok(decoded) => {
                prop_assert!(codec.check(&decoded.codeword).unwrap());
                prop_assert!(decoded.outcome.corrected_count() <= nsym / 2);
            }
            Err(err) => prop_assert!(err.is_uncorrectable()),
        }
    }
}
