use ::std::fs::File;
use ::std::io::{BufWriter, Read, Write};
use ::std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use rmp_serde::{Deserializer, Serializer};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use thiserror::Error;
use common_types::Generate::BatchRequest;

pub mod checker;
pub mod engine;
pub mod formatter;
pub mod fraction;
pub mod helper;
pub mod paper;
pub mod question;

pub use engine::math::elementary::{assemble_batch, generate, resolve_families, Family};
pub use engine::{Difficulty, GenerateFailure, GenerateResult, PROBLEMS_PER_BATCH};
pub use fraction::Fraction;
pub use paper::Paper;
pub use question::{Operator, Problem};

pub const ARCHIVE_EXTENSION: &'static str = "drill.gz";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("failed to generate problems: {0}")]
    InternalGenerationFailure(#[from] GenerateFailure),
    #[error("failed to serialise paper")]
    SerializeError,
    #[error("failed to deserialise paper")]
    DeserializeError,
    #[error("failed to (de)compress paper")]
    CompressionError,
    #[error("failed to write paper to {0}")]
    WriteError(PathBuf),
}

/// Assembles the batch described by `request` and wraps it in a paper.
pub fn generate_paper(request: &BatchRequest) -> Result<Paper, GenerationError> {
    let topics = request.effective_topics();
    let problems = assemble_batch(request.seed, &topics, request.difficulty, request.count)?;
    tracing::info!("Generated {} problems for seed {}", problems.len(), request.seed);
    Ok(Paper::new(request.seed, request.grade, topics, request.difficulty, problems))
}

/// MessagePack, then gzip.
pub fn write_archive<W: Write>(paper: &Paper, writer: W) -> Result<(), GenerationError> {
    let mut serialize_buf = Vec::new();
    if let Err(err) = paper.serialize(&mut Serializer::new(&mut serialize_buf)) {
        tracing::error!("Failed to serialise paper due to: {err}");
        return Err(GenerationError::SerializeError);
    }

    let mut encoder = GzEncoder::new(writer, Compression::default());
    if let Err(err) = encoder.write_all(&serialize_buf) {
        tracing::error!("Failed to write to compression buffer due to: {err}");
        return Err(GenerationError::CompressionError);
    }
    if let Err(err) = encoder.finish() {
        tracing::error!("Failed to compress buffer due to: {err}");
        return Err(GenerationError::CompressionError);
    }
    Ok(())
}

pub fn read_archive<R: Read>(reader: R) -> Result<Paper, GenerationError> {
    let mut decoded = Vec::new();
    if let Err(err) = GzDecoder::new(reader).read_to_end(&mut decoded) {
        tracing::error!("Failed to decompress paper due to: {err}");
        return Err(GenerationError::CompressionError);
    }
    Paper::deserialize(&mut Deserializer::new(&decoded[..])).map_err(|err| {
        tracing::error!("Failed to deserialise paper due to: {err}");
        GenerationError::DeserializeError
    })
}

/// Writes `{batch_id}.drill.gz` into `dir` and returns its path.
pub fn store_archive(paper: &Paper, dir: &Path) -> Result<PathBuf, GenerationError> {
    let path = dir.join(format!("{}.{ARCHIVE_EXTENSION}", paper.batch_id()));
    let file = File::create(&path).map_err(|err| {
        tracing::error!("Failed to create {} due to {err}", path.display());
        GenerationError::WriteError(path.clone())
    })?;
    write_archive(paper, BufWriter::new(file))?;
    Ok(path)
}
