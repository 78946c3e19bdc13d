// Entry point for the drill command line

use ::std::fs;
use ::std::io::{self, BufRead, Write};
use ::std::path::PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lazy_static::lazy_static;
use rand::{rngs::StdRng, Rng, SeedableRng};
use common_types::Generate::{BatchRequest, Grade, GRADES};
use drill_generate::{
    generate::{self, engine::PROBLEMS_PER_BATCH},
    quiz::{QuizSession, ScoreHistory, RECENT_SCORES},
    similar,
    E,
};

lazy_static!{
    static ref OUTPUT_DIR: PathBuf = {
        dotenvy::var("DRILL_OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
    };
    static ref DEFAULT_COUNT: usize = {
        dotenvy::var("DRILL_PROBLEMS_PER_BATCH").ok().and_then(|v| v.parse().ok()).unwrap_or(PROBLEMS_PER_BATCH)
    };
    static ref LOG_LEVEL: tracing::Level = {
        dotenvy::var("DRILL_LOG_LEVEL").ok().and_then(|v| v.parse().ok()).unwrap_or(tracing::Level::INFO)
    };
}

const MAX_RANDOM_SEED: u64 = 999_999;

fn parse_grade(grade: &str) -> Result<Grade, String> {
    common_types::Generate::str_to_grade(grade)
}

#[derive(Parser)]
#[command(name = "drill", version, about = "Arithmetic practice papers for exam preparation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a paper of problems and answers
    Generate {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also store a compressed archive in DRILL_OUTPUT_DIR
        #[arg(long)]
        archive: bool,
    },
    /// Answer a batch on stdin, one answer per line
    Quiz {
        #[command(flatten)]
        selection: Selection,
        /// Append the score to this JSON history and show recent results
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Make fresh problems shaped like the lines of a worksheet
    Similar {
        #[arg(long)]
        templates: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = PROBLEMS_PER_BATCH)]
        limit: usize,
    },
    /// List grades and their recommended topics
    Topics,
}

#[derive(Args)]
struct Selection {
    /// Reproduce an earlier batch; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_parser = parse_grade)]
    grade: Option<Grade>,
    /// Topic labels, repeatable or comma separated; defaults to the grade's
    /// recommended topics
    #[arg(long = "topic", value_delimiter = ',')]
    topics: Vec<String>,
    #[arg(long, default_value_t = 3)]
    difficulty: u8,
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Selection {
    fn into_request(self) -> BatchRequest {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED));
        tracing::info!("Using seed {seed}");
        BatchRequest {
            seed,
            grade: self.grade,
            topics: self.topics,
            difficulty: self.difficulty,
            count: self.count.unwrap_or(*DEFAULT_COUNT),
        }
    }
}

fn run_generate(selection: Selection, format: OutputFormat, archive: bool) -> Result<(), E> {
    let paper = generate::generate_paper(&selection.into_request())?;
    if archive {
        let path = generate::store_archive(&paper, &OUTPUT_DIR)?;
        tracing::info!("Stored paper archive at {}", path.display());
    }
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write!(stdout, "{}", paper.render_text())?,
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&paper)?)?,
    }
    Ok(())
}

fn run_quiz(selection: Selection, history: Option<PathBuf>) -> Result<(), E> {
    let paper = generate::generate_paper(&selection.into_request())?;
    let mut session = QuizSession::new(paper.into_problems());
    let mut stdout = io::stdout().lock();
    let mut lines = io::stdin().lock().lines();

    while let Some(problem) = session.current() {
        writeln!(stdout, "{}/{}. {}", session.position() + 1, session.total(), problem.display_text)?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            tracing::warn!("Input ended before the quiz was finished");
            break;
        };
        session.submit(line?);
    }

    let report = session.finish();
    writeln!(stdout, "正解数: {} / {}", report.correct, report.total)?;
    writeln!(stdout, "所要時間: {} 秒", report.elapsed_secs)?;
    for mistake in report.mistakes() {
        writeln!(stdout, "{} あなたの答え: {} / 正解: {}", mistake.question, mistake.user_answer, mistake.correct_answer)?;
    }
    writeln!(stdout, "{}", serde_json::to_string(&report.score_record())?)?;

    if let Some(path) = history {
        let mut scores = ScoreHistory::load(&path)?;
        scores.record(report.score_record());
        scores.save(&path)?;
        writeln!(stdout, "成績履歴（直近 {} 回）", scores.recent(RECENT_SCORES).len())?;
        for record in scores.recent(RECENT_SCORES) {
            writeln!(stdout, "{record}")?;
        }
        if let Some(best) = scores.best() {
            writeln!(stdout, "最高記録: {best}")?;
        }
    }
    Ok(())
}

fn run_similar(templates: PathBuf, seed: Option<u64>, limit: usize) -> Result<(), E> {
    let text = fs::read_to_string(&templates).map_err(|err| {
        tracing::error!("Failed to read templates from {}: {err}", templates.display());
        err
    })?;
    let templates = similar::extract_templates(&text, limit);
    tracing::info!("Found {} templates", templates.len());

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED)));
    let mut stdout = io::stdout().lock();
    for (i, problem) in similar::generate_from_templates(&templates, &mut rng).iter().enumerate() {
        writeln!(stdout, "{}. {}\t{}", i + 1, problem.display_text, problem.answer)?;
    }
    Ok(())
}

fn run_topics() -> Result<(), E> {
    let mut stdout = io::stdout().lock();
    for grade in GRADES.iter() {
        let topics = grade.recommended_topics().iter().map(|t| t.label()).collect::<Vec<_>>();
        writeln!(stdout, "{grade}: {}", topics.join("、"))?;
    }
    Ok(())
}

fn main() -> Result<(), E> {
    tracing_subscriber::fmt()
        .with_max_level(*LOG_LEVEL)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let result = match Cli::parse().command {
        Command::Generate { selection, format, archive } => run_generate(selection, format, archive),
        Command::Quiz { selection, history } => run_quiz(selection, history),
        Command::Similar { templates, seed, limit } => run_similar(templates, seed, limit),
        Command::Topics => run_topics(),
    };
    if let Err(ref err) = result {
        tracing::error!("drill failed: {err}");
    }
    result
}
