/*
 *
 * DES: Inverse arithmetic, the unknown is written as a box.
 * ASK: Find □ such that the equation holds
 *
 * The visible totals are built from two drawn operands so the unknown is
 * always a positive whole number.
 *
 */

use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    formatter::LABEL_BOX,
    helper,
    question::{Operator, Problem, ALL_OPERATORS},
};

pub fn generate_box(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let op = helper::choose(rng, &ALL_OPERATORS).copied().unwrap_or(Operator::Add);
    let bound = 9 + 10 * i64::from(difficulty.level());
    let a = helper::gen_range_i64(rng, 2, bound);
    let b = helper::gen_range_i64(rng, 2, bound);
    let glyph = op.glyph();

    let (equation, answer) = match op {
        Operator::Add => (format!("{LABEL_BOX} {glyph} {b} = {}", a + b), a),
        Operator::Subtract => (format!("{} {glyph} {LABEL_BOX} = {a}", a + b), b),
        Operator::Multiply => (format!("{LABEL_BOX} {glyph} {b} = {}", a * b), a),
        Operator::Divide => (format!("{} {glyph} {LABEL_BOX} = {a}", a * b), b),
    };

    Ok(Problem::new(
        format!("{equation}  のとき {LABEL_BOX} を求めよ。"),
        answer,
        Topic::InverseBox,
        difficulty.level(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Substitutes the answer into the box and checks the equation.
    fn holds(text: &str, answer: i64) -> bool {
        let equation = text.split("  のとき").next().unwrap().replace(LABEL_BOX, &answer.to_string());
        let (lhs, rhs) = equation.split_once(" = ").unwrap();
        let tokens: Vec<&str> = lhs.split(' ').collect();
        let (x, y): (i64, i64) = (tokens[0].parse().unwrap(), tokens[2].parse().unwrap());
        let rhs: i64 = rhs.parse().unwrap();
        match Operator::from_glyph(tokens[1]).unwrap() {
            Operator::Add => x + y == rhs,
            Operator::Subtract => x - y == rhs,
            Operator::Multiply => x * y == rhs,
            Operator::Divide => y != 0 && x % y == 0 && x / y == rhs,
        }
    }

    #[test]
    fn unknown_is_a_positive_integer_that_solves_the_equation() {
        let mut rng = StdRng::seed_from_u64(13);
        for n in 1..=5 {
            for _ in 0..100 {
                let problem = generate_box(Difficulty::new(n).unwrap(), &mut rng).unwrap();
                let answer: i64 = problem.answer.parse().unwrap();
                assert!(answer >= 2);
                assert!(holds(&problem.display_text, answer), "{}", problem.display_text);
            }
        }
    }

    #[test]
    fn text_matches_worksheet_phrasing() {
        let mut rng = StdRng::seed_from_u64(1);
        let problem = generate_box(Difficulty::new(2).unwrap(), &mut rng).unwrap();
        assert!(problem.display_text.ends_with("  のとき □ を求めよ。"));
    }
}
