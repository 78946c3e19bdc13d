/*
 *
 * DES: Whole-number column arithmetic.
 * ASK: Evaluate a chain of additions and subtractions
 * ASK: Multiply two numbers, or divide a product back down exactly
 * ASK: Divide and give quotient and remainder
 *
 */

use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    checker,
    engine::{Difficulty, GenerateFailure, GenerateResult},
    formatter,
    helper,
    question::{Operator, Problem, ADD_SUB},
};

const ADD_SUB_DIGITS: [u32; 5] = [2, 3, 3, 4, 5];
const ADD_SUB_TERMS: [usize; 5] = [2, 3, 4, 4, 5];
const MUL_DIV_BOUND: [i64; 5] = [9, 19, 99, 199, 999];
const REMAINDER_DIVIDEND_BOUND: [i64; 5] = [50, 100, 500, 1000, 5000];

pub fn generate_add_sub(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let digits = difficulty.pick(ADD_SUB_DIGITS);
    let terms = difficulty.pick(ADD_SUB_TERMS);
    let max_n = helper::pow10(digits) - 1;

    let nums: Vec<i64> = (0..terms).map(|_| helper::gen_range_i64(rng, 0, max_n)).collect();
    let ops = (1..terms)
        .map(|_| helper::choose(rng, &ADD_SUB).copied().unwrap_or(Operator::Add))
        .collect::<Vec<_>>();

    // only + and - appear, so left to right is the only reading
    let answer = nums[1..].iter().zip(ops.iter()).fold(nums[0], |acc, (n, op)| match op {
        Operator::Subtract => acc - n,
        _ => acc + n,
    });

    Ok(Problem::new(
        formatter::format_expression(&nums, &ops),
        answer,
        Topic::IntegerAddSub,
        difficulty.level(),
    ))
}

pub fn generate_multiply_divide(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let max_a = difficulty.pick(MUL_DIV_BOUND);
    let a = helper::gen_range_i64(rng, 2, max_a);
    let b = helper::gen_range_i64(rng, 2, max_a);

    if helper::coin_flip(rng) {
        return Ok(Problem::new(
            formatter::format_expression(&[a, b], &[Operator::Multiply]),
            a * b,
            Topic::MultiplicationColumn,
            difficulty.level(),
        ));
    }

    // draw the quotient's partner first so the dividend is always a multiple
    let divisor = helper::gen_range_i64(rng, 2, (max_a / 2).max(2));
    let dividend = a * divisor;
    debug_assert!(checker::is_exact_division(dividend, divisor));
    Ok(Problem::new(
        formatter::format_expression(&[dividend, divisor], &[Operator::Divide]),
        a,
        Topic::MultiplicationColumn,
        difficulty.level(),
    ))
}

pub fn generate_division_remainder(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let max_a = difficulty.pick(REMAINDER_DIVIDEND_BOUND);
    let level = i64::from(difficulty.level());
    let b = helper::gen_range_i64(rng, 2, 9 + 3 * level);
    let mut a = helper::gen_range_i64(rng, b + 1, max_a);
    if checker::is_i64_zero(b) {
        return Err(GenerateFailure::DivisionByZero);
    }

    // an exact draw is nudged up by one, b >= 2 keeps the remainder non-zero
    if !checker::has_remainder(a, b) {
        a += 1;
    }
    let (q, r) = (a / b, a % b);

    Ok(Problem::new(
        format!("{a} {} {b}（あまりは？）", Operator::Divide.glyph()),
        formatter::format_remainder_answer(q, r),
        Topic::DivisionWithRemainder,
        difficulty.level(),
    ))
}
