use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::generate::{
    formatter::{self, LABEL_BOX, LABEL_UNKNOWN},
    helper,
    question::{Operator, Problem, ALL_OPERATORS},
};

pub const SIMILAR_TOPIC: &'static str = "類題";
const REMAINDER_MARKERS: [&'static str; 2] = ["余り", "あまり"];
// difficulty is not meaningful for template-driven problems
const SIMILAR_DIFFICULTY: u8 = 1;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    DivideWithRemainder,
}

impl TemplateKind {
    fn from_operator(op: Operator, template: &str) -> Self {
        match op {
            Operator::Add => TemplateKind::Add,
            Operator::Subtract => TemplateKind::Subtract,
            Operator::Multiply => TemplateKind::Multiply,
            Operator::Divide if REMAINDER_MARKERS.iter().any(|m| template.contains(m)) => TemplateKind::DivideWithRemainder,
            Operator::Divide => TemplateKind::Divide,
        }
    }
}

/// The first operator glyph found, checked in `+ - × ÷` order.
pub fn classify(template: &str) -> Option<TemplateKind> {
    ALL_OPERATORS
        .iter()
        .find(|op| template.contains(op.glyph()))
        .map(|op| TemplateKind::from_operator(*op, template))
}

/// Lines shaped like drill items: an operator plus a blank to fill in.
pub fn extract_templates(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| ALL_OPERATORS.iter().any(|op| line.contains(op.glyph())))
        .filter(|line| line.contains(LABEL_BOX) || line.contains(LABEL_UNKNOWN))
        .take(limit)
        .map(str::to_string)
        .collect()
}

pub fn generate_similar(kind: TemplateKind, rng: &mut dyn RngCore) -> Problem {
    let (text, answer) = match kind {
        TemplateKind::Add => {
            let (a, b) = (helper::gen_range_i64(rng, 10, 99), helper::gen_range_i64(rng, 10, 99));
            (format!("{a} + {b} = ?"), (a + b).to_string())
        },
        TemplateKind::Subtract => {
            let (x, y) = (helper::gen_range_i64(rng, 10, 99), helper::gen_range_i64(rng, 10, 99));
            let (a, b) = (x.max(y), x.min(y));
            (format!("{a} - {b} = ?"), (a - b).to_string())
        },
        TemplateKind::Multiply => {
            let (a, b) = (helper::gen_range_i64(rng, 2, 9), helper::gen_range_i64(rng, 2, 9));
            (format!("{a} × {b} = ?"), (a * b).to_string())
        },
        TemplateKind::Divide => {
            let b = helper::gen_range_i64(rng, 2, 9);
            let a = b * helper::gen_range_i64(rng, 2, 9);
            (format!("{a} ÷ {b} = ?"), (a / b).to_string())
        },
        TemplateKind::DivideWithRemainder => {
            let b = helper::gen_range_i64(rng, 2, 9);
            let a = b * helper::gen_range_i64(rng, 2, 9) + helper::gen_range_i64(rng, 1, b - 1);
            (format!("{a} ÷ {b} = 商 ?, 余り ?"), formatter::format_remainder_answer(a / b, a % b))
        },
    };
    Problem::new(text, answer, SIMILAR_TOPIC, SIMILAR_DIFFICULTY)
}

/// One similar problem per template; unrecognised templates fall back to
/// addition.
pub fn generate_from_templates<S: AsRef<str>>(templates: &[S], rng: &mut dyn RngCore) -> Vec<Problem> {
    templates
        .iter()
        .map(|template| {
            let kind = classify(template.as_ref()).unwrap_or_else(|| {
                tracing::warn!("No operator in template {:?}, using addition", template.as_ref());
                TemplateKind::Add
            });
            generate_similar(kind, rng)
        })
        .collect()
}
