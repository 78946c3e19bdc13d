use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use common_types::Generate::Grade;

use super::formatter::{self, LABEL_ANSWERS_SHEET, LABEL_LIST_SEPARATOR, LABEL_PROBLEMS_SHEET, PAGE_BREAK};
use super::question::Problem;

pub const PAPER_TITLE: &'static str = "計算プリント";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Paper {
    batch_id: Uuid,
    created_on: NaiveDateTime,
    seed: u64,
    grade: Option<Grade>,
    topics: Vec<String>,
    difficulty: u8,
    problems: Vec<Problem>,
}
impl Paper {
    pub fn new(seed: u64, grade: Option<Grade>, topics: Vec<String>, difficulty: u8, problems: Vec<Problem>) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            created_on: Utc::now().naive_utc(),
            seed,
            grade,
            topics,
            difficulty,
            problems,
        }
    }
    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }
    pub fn created_on(&self) -> NaiveDateTime {
        self.created_on
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
    pub fn title(&self) -> String {
        match self.grade {
            Some(grade) => format!("{grade} {PAPER_TITLE}"),
            None => PAPER_TITLE.to_string(),
        }
    }
    pub fn subtitle(&self) -> String {
        format!(
            "難度:{} / 分野:{} / 生成:{}",
            self.difficulty,
            self.topics.join(LABEL_LIST_SEPARATOR),
            self.created_on.format("%Y-%m-%d %H:%M"),
        )
    }
    /// Problem sheet, a page break, then the answer sheet.
    pub fn render_text(&self) -> String {
        let mut sheet = Vec::with_capacity(2 * self.problems.len() + 6);
        sheet.push(format!("{}{LABEL_PROBLEMS_SHEET}", self.title()));
        sheet.push(self.subtitle());
        sheet.push(String::new());
        for (i, problem) in self.problems.iter().enumerate() {
            sheet.push(formatter::format_numbered_line(i + 1, &problem.display_text));
        }
        sheet.push(PAGE_BREAK.to_string());
        sheet.push(format!("{}{LABEL_ANSWERS_SHEET}", self.title()));
        sheet.push(self.subtitle());
        sheet.push(String::new());
        for (i, problem) in self.problems.iter().enumerate() {
            sheet.push(formatter::format_numbered_line(i + 1, &problem.answer));
        }
        sheet.join("\n") + "\n"
    }
}
