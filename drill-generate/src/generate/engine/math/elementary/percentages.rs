use rand::RngCore;
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    formatter,
    fraction::Fraction,
    helper,
    question::Problem,
};

const ANSWER_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PercentMode {
    Of,
    Increase,
    Decrease,
}

const MODES: [PercentMode; 3] = [PercentMode::Of, PercentMode::Increase, PercentMode::Decrease];

pub fn generate_basic(difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let base = helper::gen_range_i64(rng, 20, 500 * i64::from(difficulty.level()));
    let p = helper::gen_range_i64(rng, 5, 90);
    let mode = if difficulty.level() >= 2 {
        helper::choose(rng, &MODES).copied().unwrap_or(PercentMode::Of)
    } else {
        PercentMode::Of
    };

    let whole = Fraction::from_integer(i128::from(base));
    let rate = Fraction::new(i128::from(p), 100)?;
    let one = Fraction::from_integer(1);
    let (text, value) = match mode {
        PercentMode::Of => (format!("{p}% の {base} は？"), whole * rate),
        PercentMode::Increase => (format!("{base} を {p}% 増やすと？"), whole * (one + rate)),
        PercentMode::Decrease => (format!("{base} を {p}% 減らすと？"), whole * (one - rate)),
    };

    Ok(Problem::new(
        text,
        formatter::format_decimal_raw(&value.round_to_places(ANSWER_PLACES)),
        Topic::PercentageBasic,
        difficulty.level(),
    ))
}
