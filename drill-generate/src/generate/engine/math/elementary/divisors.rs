use num_integer::Integer;
use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    helper,
    question::Problem,
};

const BOUND: [i64; 5] = [40, 60, 90, 120, 200];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DivisorMode {
    Gcd,
    Lcm,
}

const MODES: [DivisorMode; 2] = [DivisorMode::Gcd, DivisorMode::Lcm];

pub fn generate_gcd_lcm(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let hi = difficulty.pick(BOUND);
    let x = helper::gen_range_i64(rng, 6, hi);
    let y = helper::gen_range_i64(rng, 6, hi);
    let mode = if difficulty.level() >= 2 {
        helper::choose(rng, &MODES).copied().unwrap_or(DivisorMode::Gcd)
    } else {
        DivisorMode::Gcd
    };

    let (name, value) = match mode {
        DivisorMode::Gcd => ("最大公約数", x.gcd(&y)),
        DivisorMode::Lcm => ("最小公倍数", x.lcm(&y)),
    };

    Ok(Problem::new(
        format!("{x} と {y} の{name}を求めよ。"),
        value,
        Topic::GcdLcm,
        difficulty.level(),
    ))
}
