use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use common_types::Generate::Topic;
use crate::generate::{
    engine::{Difficulty, GenerateResult},
    fraction::Fraction,
    helper,
    question::{Operator, Problem},
};

mod decimals;
mod divisors;
mod fractions;
mod integers;
mod inverse;
mod percentages;
mod ratios;

pub type Generator = fn(Difficulty, &mut dyn RngCore) -> GenerateResult<Problem>;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    IntegerAddSub,
    MultiplyDivide,
    DivisionRemainder,
    DecimalMixed,
    FractionAddSub,
    FractionMixed,
    PercentageBasic,
    RatioBasic,
    GcdLcm,
    InverseBox,
}

pub const DEFAULT_FAMILY: Family = Family::IntegerAddSub;

impl Family {
    pub fn generator(&self) -> Generator {
        match self {
            Family::IntegerAddSub => integers::generate_add_sub,
            Family::MultiplyDivide => integers::generate_multiply_divide,
            Family::DivisionRemainder => integers::generate_division_remainder,
            Family::DecimalMixed => decimals::generate_mixed,
            Family::FractionAddSub => fractions::generate_add_sub,
            Family::FractionMixed => fractions::generate_mixed,
            Family::PercentageBasic => percentages::generate_basic,
            Family::RatioBasic => ratios::generate_basic,
            Family::GcdLcm => divisors::generate_gcd_lcm,
            Family::InverseBox => inverse::generate_box,
        }
    }
    pub fn generate(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
        self.generator()(difficulty, rng)
    }
}

pub fn get_families_from_topic(topic: &Topic) -> &'static [Family] {
    match topic {
        Topic::IntegerAddSub => &[Family::IntegerAddSub],
        Topic::MultiplicationColumn => &[Family::MultiplyDivide],
        Topic::DivisionWithRemainder => &[Family::DivisionRemainder],
        Topic::LargeNumbers => &[Family::IntegerAddSub, Family::MultiplyDivide],
        Topic::DecimalArithmetic => &[Family::DecimalMixed],
        Topic::FactorsMultiples => &[Family::GcdLcm],
        Topic::FractionAddSub => &[Family::FractionAddSub],
        Topic::FractionMixed => &[Family::FractionMixed],
        Topic::DecimalFractionProducts => &[Family::FractionMixed],
        Topic::PercentageBasic => &[Family::PercentageBasic],
        Topic::RatioBasic => &[Family::RatioBasic],
        Topic::FractionDecimalCompound => &[Family::FractionMixed, Family::DecimalMixed],
        Topic::InverseBox => &[Family::InverseBox],
        Topic::GcdLcm => &[Family::GcdLcm],
        Topic::ProportionBasic => &[Family::RatioBasic],
    }
}

/// One problem for `topic`, picking among its families when it has several.
pub fn generate(topic: Topic, difficulty: Difficulty, rng: &mut dyn RngCore) -> GenerateResult<Problem> {
    let family = helper::choose(rng, get_families_from_topic(&topic))
        .copied()
        .unwrap_or(DEFAULT_FAMILY);
    family.generate(difficulty, rng)
}

/// Families for the requested topic names in request order, duplicates
/// dropped. Names that are not topics are skipped; an empty result falls back
/// to the default family.
pub fn resolve_families<S: AsRef<str>>(topics: &[S]) -> Vec<Family> {
    let mut families = Vec::new();
    for name in topics.iter() {
        let Ok(topic) = name.as_ref().parse::<Topic>() else {
            tracing::warn!("Unknown topic {:?} ignored", name.as_ref());
            continue;
        };
        for family in get_families_from_topic(&topic) {
            if !families.contains(family) {
                families.push(*family);
            }
        }
    }
    if families.is_empty() {
        families.push(DEFAULT_FAMILY);
    }
    families
}

/// First requested topic name (as given) whose topic owns `family`.
fn owning_topic_name<'a, S: AsRef<str>>(topics: &'a [S], family: Family) -> Option<&'a str> {
    topics
        .iter()
        .map(|name| name.as_ref())
        .find(|name| {
            name.parse::<Topic>()
                .map(|topic| get_families_from_topic(&topic).contains(&family))
                .unwrap_or(false)
        })
}

pub fn assemble_batch<S: AsRef<str>>(seed: u64, topics: &[S], difficulty: u8, count: usize) -> GenerateResult<Vec<Problem>> {
    let difficulty = Difficulty::new(difficulty)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let families = resolve_families(topics);
    tracing::debug!("Assembling {count} problems from {:?} at difficulty {}, seed {seed}", families, difficulty.level());

    let mut problems = Vec::with_capacity(count);
    for _ in 0..count {
        let family = helper::choose(&mut rng, &families).copied().unwrap_or(DEFAULT_FAMILY);
        let problem = family.generate(difficulty, &mut rng)?;
        let problem = match owning_topic_name(topics, family) {
            Some(name) => problem.relabelled(name),
            None => problem,
        };
        problems.push(problem);
    }
    Ok(problems)
}

/// Strict left-to-right evaluation, `a ÷ b × c` is `(a ÷ b) × c`.
pub fn evaluate_left_to_right(terms: &[Fraction], operators: &[Operator]) -> GenerateResult<Fraction> {
    let Some((first, rest)) = terms.split_first() else {
        return Ok(Fraction::from_integer(0));
    };
    rest.iter()
        .zip(operators.iter())
        .try_fold(*first, |acc, (term, op)| acc.apply(*op, *term))
}

/// Conventional evaluation, × and ÷ before + and -.
pub fn evaluate_with_precedence(terms: &[Fraction], operators: &[Operator]) -> GenerateResult<Fraction> {
    let Some((first, rest)) = terms.split_first() else {
        return Ok(Fraction::from_integer(0));
    };
    let mut total = Fraction::from_integer(0);
    let mut pending = Operator::Add;
    let mut product = *first;
    for (term, op) in rest.iter().zip(operators.iter()) {
        if op.is_multiplicative() {
            product = product.apply(*op, *term)?;
        } else {
            total = total.apply(pending, product)?;
            pending = *op;
            product = *term;
        }
    }
    total.apply(pending, product)
}
