use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub display_text: String,
    pub answer: String,
    pub topic: String,
    pub difficulty: u8,
}

impl Problem {
    pub fn new<T, U, V>(display_text: T, answer: U, topic: V, difficulty: u8) -> Self
    where
        T: ToString,
        U: ToString,
        V: ToString,
    {
        Self {
            display_text: display_text.to_string(),
            answer: answer.to_string(),
            topic: topic.to_string(),
            difficulty,
        }
    }
    /// Same problem shown under a different topic name.
    pub fn relabelled<T: ToString>(self, topic: T) -> Self {
        Self { topic: topic.to_string(), ..self }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

pub const ADD_SUB: [Operator; 2] = [Operator::Add, Operator::Subtract];
pub const ADD_SUB_MUL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];
pub const ALL_OPERATORS: [Operator; 4] = [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide];

impl Operator {
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        ALL_OPERATORS.iter().find(|op| op.glyph() == glyph).copied()
    }
    /// Multiplicative operators bind tighter under conventional precedence.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for op in ALL_OPERATORS.iter() {
            assert_eq!(Operator::from_glyph(op.glyph()), Some(*op));
        }
        assert_eq!(Operator::from_glyph("*"), None);
    }

    #[test]
    fn relabel_keeps_text_and_answer() {
        let problem = Problem::new("1 + 2", 3, "整数のたし算・ひき算", 1);
        let relabelled = problem.clone().relabelled("大きな数と筆算");
        assert_eq!(relabelled.display_text, problem.display_text);
        assert_eq!(relabelled.answer, "3");
        assert_eq!(relabelled.topic, "大きな数と筆算");
    }
}
