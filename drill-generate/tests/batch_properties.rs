//! Batch-level properties checked across many seeds.
//!
//! Every answer is recomputed here from the display text alone, so a
//! generator that formats one thing and answers another is caught.

use drill_generate::generate::{assemble_batch, generate, Difficulty, Fraction, GenerateFailure, Problem};
use common_types::Generate::{Topic, GRADES, TOPICS};
use rand::{rngs::StdRng, SeedableRng};

const SEEDS: std::ops::Range<u64> = 0..40;

fn tokens(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

fn fold_left_to_right(text: &str) -> Fraction {
    let tokens = tokens(text);
    let mut value: Fraction = tokens[0].parse().unwrap();
    for pair in tokens[1..].chunks(2) {
        let rhs: Fraction = pair[1].parse().unwrap();
        value = match pair[0] {
            "+" => value + rhs,
            "-" => value - rhs,
            "×" => value * rhs,
            "÷" => value.checked_div(rhs).unwrap(),
            op => panic!("unexpected operator {op}"),
        };
    }
    value
}

/// × binds before + and -, as in the decimal drills.
fn fold_with_precedence(text: &str) -> Fraction {
    let tokens = tokens(text);
    let mut sums: Vec<Fraction> = vec![tokens[0].parse().unwrap()];
    for pair in tokens[1..].chunks(2) {
        let rhs: Fraction = pair[1].parse().unwrap();
        match pair[0] {
            "×" => {
                let last = sums.pop().unwrap();
                sums.push(last * rhs);
            },
            "+" => sums.push(rhs),
            "-" => sums.push(-rhs),
            op => panic!("unexpected operator {op}"),
        }
    }
    sums.into_iter().fold(Fraction::from_integer(0), |acc, v| acc + v)
}

fn decimal_answer_places(difficulty: u8) -> u32 {
    [1, 1, 2, 3, 3][usize::from(difficulty - 1)].max(2)
}

fn assert_reduced(answer: &str) {
    let value: Fraction = answer.parse().unwrap();
    assert!(value.denominator() > 0);
    assert_eq!(value.to_string(), answer, "answer not in lowest terms");
}

fn check_answer(problem: &Problem) {
    let text = problem.display_text.as_str();
    match problem.topic.parse::<Topic>().unwrap() {
        Topic::IntegerAddSub | Topic::FractionAddSub | Topic::FractionMixed => {
            assert_eq!(fold_left_to_right(text).to_string(), problem.answer, "{text}");
            assert_reduced(&problem.answer);
        },
        Topic::MultiplicationColumn => {
            if let Some((dividend, divisor)) = text.split_once(" ÷ ") {
                let (dividend, divisor): (i64, i64) = (dividend.parse().unwrap(), divisor.parse().unwrap());
                assert_eq!(dividend % divisor, 0, "{text}");
            }
            assert_eq!(fold_left_to_right(text).to_string(), problem.answer, "{text}");
        },
        Topic::DivisionWithRemainder => {
            let (a, rest) = text.split_once(" ÷ ").unwrap();
            let b = rest.trim_end_matches("（あまりは？）");
            let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
            assert!(a % b > 0, "{text}");
            assert_eq!(problem.answer, format!("商 {}、あまり {}", a / b, a % b));
        },
        Topic::DecimalArithmetic => {
            let expected = fold_with_precedence(text).round_to_places(decimal_answer_places(problem.difficulty));
            assert_eq!(problem.answer.parse::<Fraction>().unwrap(), expected, "{text}");
        },
        Topic::RatioBasic => {
            if let Some((lhs, rest)) = text.split_once(" = ") {
                let (a, b) = lhs.split_once(':').unwrap();
                let c = rest.split_once(':').unwrap().0;
                let (a, b, c): (i128, i128, i128) = (a.parse().unwrap(), b.parse().unwrap(), c.parse().unwrap());
                assert_eq!(problem.answer, Fraction::new(b * c, a).unwrap().to_string());
                assert_reduced(&problem.answer);
            }
        },
        _ => assert!(!problem.answer.is_empty()),
    }
}

#[test]
fn identical_arguments_give_identical_batches() {
    for seed in SEEDS {
        for grade in GRADES.iter() {
            let topics: Vec<&str> = grade.recommended_topics().iter().map(|t| t.label()).collect();
            for difficulty in 1..=5 {
                let first = assemble_batch(seed, &topics, difficulty, 10).unwrap();
                let second = assemble_batch(seed, &topics, difficulty, 10).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn single_topic_answers_recompute_from_text() {
    let topics = [
        Topic::IntegerAddSub,
        Topic::MultiplicationColumn,
        Topic::DivisionWithRemainder,
        Topic::DecimalArithmetic,
        Topic::FractionAddSub,
        Topic::FractionMixed,
        Topic::RatioBasic,
    ];
    for topic in topics.iter() {
        for seed in SEEDS {
            for difficulty in 1..=5 {
                for problem in assemble_batch(seed, &[topic.label()], difficulty, 10).unwrap() {
                    assert_eq!(problem.topic, topic.label());
                    assert_eq!(problem.difficulty, difficulty);
                    check_answer(&problem);
                }
            }
        }
    }
}

#[test]
fn empty_selection_falls_back_to_integer_add_sub() {
    let empty: [&str; 0] = [];
    let problems = assemble_batch(1, &empty, 3, 10).unwrap();
    assert_eq!(problems.len(), 10);
    for problem in problems.iter() {
        assert_eq!(problem.topic, "整数のたし算・ひき算");
        // difficulty 3 is four terms
        assert_eq!(tokens(&problem.display_text).len(), 7);
        check_answer(problem);
    }
}

#[test]
fn unknown_topics_fall_back_without_error() {
    let problems = assemble_batch(8, &["図形の面積", "速さ"], 2, 10).unwrap();
    assert!(problems.iter().all(|p| p.topic == "整数のたし算・ひき算"));
}

#[test]
fn fraction_fixture_reproduces() {
    let fixture = assemble_batch(42, &["分数のたし算・ひき算"], 1, 1).unwrap();
    assert_eq!(fixture.len(), 1);
    for _ in 0..5 {
        assert_eq!(assemble_batch(42, &["分数のたし算・ひき算"], 1, 1).unwrap(), fixture);
    }
    // the first slot of a longer batch consumes the same draws
    assert_eq!(assemble_batch(42, &["分数のたし算・ひき算"], 1, 10).unwrap()[0], fixture[0]);
    let problem = &fixture[0];
    assert_eq!(problem.display_text, "1 - 2/5");
    assert_eq!(problem.answer, "3/5");
    assert_eq!(problem.topic, "分数のたし算・ひき算");
    assert_eq!(problem.difficulty, 1);
    check_answer(problem);
}

#[test]
fn top_difficulty_integer_problems_have_five_short_terms() {
    let mut rng = StdRng::seed_from_u64(5);
    let difficulty = Difficulty::new(5).unwrap();
    for _ in 0..500 {
        let problem = generate(Topic::IntegerAddSub, difficulty, &mut rng).unwrap();
        let numbers: Vec<&str> = tokens(&problem.display_text).into_iter().step_by(2).collect();
        assert_eq!(numbers.len(), 5);
        assert!(numbers.iter().all(|n| n.len() <= 5 && n.parse::<u32>().is_ok()));
    }
}

#[test]
fn relabels_with_first_requested_owner() {
    let topics = ["分数・小数の複合計算", "分数の四則混合", "小数の四則"];
    for seed in SEEDS {
        for problem in assemble_batch(seed, &topics, 4, 10).unwrap() {
            // both families belong to the first request
            assert_eq!(problem.topic, "分数・小数の複合計算");
        }
    }
    let topics = ["小数の四則", "分数・小数の複合計算"];
    let problems = assemble_batch(3, &topics, 4, 50).unwrap();
    assert!(problems.iter().any(|p| p.topic == "小数の四則"));
    assert!(problems.iter().any(|p| p.topic == "分数・小数の複合計算"));
}

#[test]
fn every_topic_generates_for_every_difficulty() {
    for topic in TOPICS.iter() {
        for difficulty in 1..=5 {
            let problems = assemble_batch(99, &[topic.label()], difficulty, 3).unwrap();
            assert_eq!(problems.len(), 3);
        }
    }
}

#[test]
fn out_of_range_difficulty_is_reported() {
    assert_eq!(
        assemble_batch(1, &["かけ算の筆算"], 0, 10),
        Err(GenerateFailure::InvalidDifficulty(0))
    );
}
