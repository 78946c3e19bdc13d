/*
 *
 * DES: Mixed decimal arithmetic over +, - and ×.
 * ASK: Evaluate the expression, answer rounded to max(2, places) decimals
 *
 */

use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    formatter,
    fraction::Fraction,
    helper,
    question::{Operator, Problem, ADD_SUB_MUL},
};

use super::evaluate_with_precedence;

const PLACES: [u32; 5] = [1, 1, 2, 3, 3];
const TERMS: [usize; 5] = [2, 2, 3, 3, 4];
const MIN_ANSWER_PLACES: u32 = 2;

/// Upper bound of each operand, `10^(1 + d/2)`.
fn magnitude(difficulty: Difficulty) -> i64 {
    helper::pow10(1 + u32::from(difficulty.level()) / 2)
}

pub fn generate_mixed(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let places = difficulty.pick(PLACES);
    let terms = difficulty.pick(TERMS);
    let grid_max = magnitude(difficulty) * helper::pow10(places);

    // operands are drawn on the 10^-places grid, i.e. already rounded
    let nums: Vec<Fraction> = (0..terms)
        .map(|_| Fraction::from_scaled(i128::from(helper::gen_range_i64(rng, 0, grid_max)), places))
        .collect();
    let ops = (1..terms)
        .map(|_| helper::choose(rng, &ADD_SUB_MUL).copied().unwrap_or(Operator::Add))
        .collect::<Vec<_>>();

    let value = evaluate_with_precedence(&nums, &ops)?;
    // the result is rounded a second time, possibly coarser than the operands
    let answer = value.round_to_places(places.max(MIN_ANSWER_PLACES));

    let shown = nums.iter().map(formatter::format_decimal_raw).collect::<Vec<_>>();
    Ok(Problem::new(
        formatter::format_expression(&shown, &ops),
        formatter::format_decimal_raw(&answer),
        Topic::DecimalArithmetic,
        difficulty.level(),
    ))
}
