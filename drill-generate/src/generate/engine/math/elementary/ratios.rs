use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    formatter,
    fraction::Fraction,
    helper,
    question::Problem,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RatioMode {
    Equivalent,
    CrossMultiply,
}

const MODES: [RatioMode; 2] = [RatioMode::Equivalent, RatioMode::CrossMultiply];

pub fn generate_basic(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let level = i64::from(difficulty.level());
    let a = helper::gen_range_i64(rng, 2, 9 + 2 * level);
    let b = helper::gen_range_i64(rng, 2, 9 + 2 * level);
    let k = helper::gen_range_i64(rng, 2, 5 + level);
    let mode = if difficulty.level() >= 2 {
        helper::choose(rng, &MODES).copied().unwrap_or(RatioMode::Equivalent)
    } else {
        RatioMode::Equivalent
    };

    let (text, answer) = match mode {
        RatioMode::Equivalent => (
            format!("a:b={} のとき、{} と等しい比を書け。", formatter::format_ratio(a, b), formatter::format_ratio(k * a, k * b)),
            formatter::format_ratio(a, b),
        ),
        RatioMode::CrossMultiply => {
            // a:b = c:x  =>  x = b*c/a
            let c = helper::gen_range_i64(rng, 2, 9 + 2 * level);
            let x = Fraction::new(i128::from(b * c), i128::from(a))?;
            (format!("{} = {c}:x のとき x を求めよ。", formatter::format_ratio(a, b)), x.to_string())
        },
    };

    Ok(Problem::new(text, answer, Topic::RatioBasic, difficulty.level()))
}
