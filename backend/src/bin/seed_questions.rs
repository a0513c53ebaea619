//! Load trivia questions from a JSON file into PostgreSQL.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use backend::domain::QuestionService;
use backend::domain::ports::{AddQuestionRequest, QuestionCommand};
use backend::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselQuestionRepository, PoolConfig,
    run_pending_migrations_blocking,
};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use serde::Deserialize;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `seed-questions` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-questions",
    about = "Validate and insert trivia questions from a JSON array",
    version
)]
struct CliArgs {
    /// Path to a JSON file holding an array of question records.
    #[arg(value_name = "path")]
    input: PathBuf,
    /// Database connection URL. Falls back to `TRIVIA_DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Apply pending migrations before inserting.
    #[arg(long = "migrate")]
    migrate: bool,
    /// Validate the file without touching the database.
    #[arg(long = "dry-run")]
    dry_run: bool,
}

/// One question as written in the seed file.
#[derive(Debug, Clone, Deserialize)]
struct SeedRecord {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

impl From<SeedRecord> for AddQuestionRequest {
    fn from(record: SeedRecord) -> Self {
        Self {
            question: record.question,
            answer: record.answer,
            difficulty: record.difficulty,
            category: record.category,
        }
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let raw = read_input(&args.input)?;
    let requests = parse_records(&raw)?;
    let invalid = report_invalid(&requests);

    if args.dry_run {
        println!("records={} invalid={invalid}", requests.len());
        return Ok(());
    }

    let database_url = resolve_database_url(args.database_url)?;
    if args.migrate {
        let applied = run_pending_migrations_blocking(database_url.clone())
            .await
            .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
        info!(applied, "migrations applied");
    }
    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let service = QuestionService::new(
        Arc::new(DieselQuestionRepository::new(pool.clone())),
        Arc::new(DieselCategoryRepository::new(pool)),
    );

    let mut inserted = 0_usize;
    let mut rejected = 0_usize;
    for (index, request) in requests.into_iter().enumerate() {
        match service.add_question(request).await {
            Ok(question) => {
                inserted += 1;
                info!(index, id = question.id.get(), "question inserted");
            }
            Err(error) => {
                rejected += 1;
                warn!(index, reason = error.message(), "question rejected");
            }
        }
    }

    println!("inserted={inserted}");
    println!("rejected={rejected}");
    Ok(())
}

fn read_input(path: &Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "input path must be a file"))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        io::Error::other(format!(
            "open input parent directory '{}': {error}",
            parent.display()
        ))
    })?;
    directory
        .read_to_string(Path::new(file_name))
        .map_err(|error| io::Error::other(format!("read input file '{}': {error}", path.display())))
}

fn parse_records(raw: &str) -> io::Result<Vec<AddQuestionRequest>> {
    let records: Vec<SeedRecord> = serde_json::from_str(raw).map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("seed file must be a JSON array of questions: {error}"),
        )
    })?;
    Ok(records.into_iter().map(AddQuestionRequest::from).collect())
}

/// Log every record that would fail validation and return how many did.
fn report_invalid(requests: &[AddQuestionRequest]) -> usize {
    requests
        .iter()
        .enumerate()
        .filter_map(|(index, request)| request.clone().validate().err().map(|v| (index, v)))
        .inspect(|(index, violations)| {
            for violation in violations {
                warn!(
                    index,
                    field = violation.field,
                    code = violation.code,
                    "invalid seed record"
                );
            }
        })
        .count()
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("TRIVIA_DATABASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or TRIVIA_DATABASE_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "TRIVIA_DATABASE_URL must not be empty",
        ));
    }
    Ok(from_env)
}

#[cfg(test)]
mod tests {
    //! Unit tests for seed file parsing and CLI helpers.

    use env_lock::lock_env;
    use rstest::rstest;

    use super::{parse_records, report_invalid, resolve_database_url};

    #[rstest]
    fn records_parse_with_missing_fields() {
        let requests = parse_records(
            r#"[
                {"question": "Who painted the Mona Lisa?", "answer": "Leonardo da Vinci",
                 "difficulty": 3, "category": 2},
                {"question": "Largest ocean?", "answer": "Pacific"}
            ]"#,
        )
        .expect("records should parse");

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].category, Some(2));
        assert_eq!(requests[1].difficulty, None);
        assert_eq!(report_invalid(&requests), 1);
    }

    #[rstest]
    #[case("{}")]
    #[case("not json")]
    fn non_array_input_is_rejected(#[case] raw: &str) {
        let error = parse_records(raw).expect_err("input should be rejected");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
    }

    #[rstest]
    fn explicit_database_url_wins() {
        let url = resolve_database_url(Some("postgres://localhost/trivia".to_owned()))
            .expect("explicit url");
        assert_eq!(url, "postgres://localhost/trivia");
    }

    #[rstest]
    fn blank_explicit_database_url_is_rejected() {
        let error = resolve_database_url(Some("  ".to_owned())).expect_err("blank url");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn missing_database_url_is_reported() {
        let _guard = lock_env([("TRIVIA_DATABASE_URL", None::<String>)]);
        let error = resolve_database_url(None).expect_err("missing url");
        assert!(error.to_string().contains("TRIVIA_DATABASE_URL"));
    }
}
