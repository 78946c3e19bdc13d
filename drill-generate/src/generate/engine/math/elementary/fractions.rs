/*
 *
 * DES: Exact fraction arithmetic, operands and answers in lowest terms.
 * ASK: Add or subtract two fractions
 * ASK: Evaluate a 2-3 term chain over +, -, ×, ÷ strictly left to right
 *
 */

use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    formatter,
    fraction::Fraction,
    helper,
    question::{Operator, Problem, ADD_SUB, ALL_OPERATORS},
};

use super::evaluate_left_to_right;

const ADD_SUB_DENOMINATOR_BOUND: [i64; 5] = [5, 7, 9, 12, 15];
const MIXED_DENOMINATOR_BOUND: [i64; 5] = [6, 9, 12, 15, 18];
const MIN_DENOMINATOR: i64 = 2;

/// Numerator in `1..bound`, denominator in `2..=bound`; may be improper.
fn draw_fraction(rng: &mut dyn RngCore, bound: i64) -> GenerateResult<Fraction> {
    let numerator = helper::gen_range_i64(rng, 1, bound - 1);
    let denominator = helper::gen_range_i64(rng, MIN_DENOMINATOR, bound);
    Fraction::new(i128::from(numerator), i128::from(denominator))
}

pub fn generate_add_sub(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let max_d = difficulty.pick(ADD_SUB_DENOMINATOR_BOUND);
    let a = draw_fraction(rng, max_d)?;
    let b = draw_fraction(rng, max_d)?;
    let op = helper::choose(rng, &ADD_SUB).copied().unwrap_or(Operator::Add);

    Ok(Problem::new(
        formatter::format_expression(&[a, b], &[op]),
        a.apply(op, b)?,
        Topic::FractionAddSub,
        difficulty.level(),
    ))
}

pub fn generate_mixed(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let max_d = difficulty.pick(MIXED_DENOMINATOR_BOUND);
    let terms = if difficulty.level() <= 2 { 2 } else { 3 };

    let frs = (0..terms)
        .map(|_| draw_fraction(rng, max_d))
        .collect::<GenerateResult<Vec<_>>>()?;
    let ops = (1..terms)
        .map(|_| helper::choose(rng, &ALL_OPERATORS).copied().unwrap_or(Operator::Add))
        .collect::<Vec<_>>();

    Ok(Problem::new(
        formatter::format_expression(&frs, &ops),
        evaluate_left_to_right(&frs, &ops)?,
        Topic::FractionMixed,
        difficulty.level(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use rand::{rngs::StdRng, SeedableRng};

    fn level(n: u8) -> Difficulty {
        Difficulty::new(n).unwrap()
    }

    fn assert_lowest_terms(text: &str) {
        let value: Fraction = text.parse().unwrap();
        assert_eq!(value.to_string(), text);
        assert!(value.denominator() > 0);
        assert_eq!(value.numerator().gcd(&value.denominator()), 1);
    }

    #[test]
    fn drawn_fractions_stay_positive_and_bounded() {
        let mut rng = StdRng::seed_from_u64(31);
        for &bound in ADD_SUB_DENOMINATOR_BOUND.iter().chain(MIXED_DENOMINATOR_BOUND.iter()) {
            let largest = Fraction::new(i128::from(bound - 1), i128::from(MIN_DENOMINATOR)).unwrap();
            for _ in 0..200 {
                let value = draw_fraction(&mut rng, bound).unwrap();
                assert!(value > Fraction::from_integer(0));
                assert!(value <= largest);
            }
        }
    }

    #[test]
    fn add_sub_answers_are_reduced() {
        for n in 1..=5 {
            let mut rng = StdRng::seed_from_u64(u64::from(n));
            for _ in 0..100 {
                let problem = generate_add_sub(level(n), &mut rng).unwrap();
                assert_lowest_terms(&problem.answer);
                let tokens: Vec<&str> = problem.display_text.split(' ').collect();
                assert_eq!(tokens.len(), 3);
                assert_lowest_terms(tokens[0]);
                assert_lowest_terms(tokens[2]);
            }
        }
    }

    #[test]
    fn mixed_term_count_depends_on_difficulty() {
        let mut rng = StdRng::seed_from_u64(12);
        for n in 1..=5 {
            let problem = generate_mixed(level(n), &mut rng).unwrap();
            let expected_terms = if n <= 2 { 2 } else { 3 };
            assert_eq!(problem.display_text.split(' ').count(), 2 * expected_terms - 1);
            assert_lowest_terms(&problem.answer);
        }
    }

    #[test]
    fn left_to_right_ignores_precedence() {
        let half = Fraction::new(1, 2).unwrap();
        let third = Fraction::new(1, 3).unwrap();
        let value = evaluate_left_to_right(&[half, third, half], &[Operator::Add, Operator::Multiply]).unwrap();
        // (1/2 + 1/3) × 1/2
        assert_eq!(value.to_string(), "5/12");
        let value = evaluate_left_to_right(&[half, third, half], &[Operator::Divide, Operator::Multiply]).unwrap();
        assert_eq!(value.to_string(), "3/4");
    }
}
