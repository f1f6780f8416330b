//! Command implementations for the pilum CLI.

use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::analysis::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::corpus::{Corpus, InMemoryCorpus};
use crate::error::Result;
use crate::lexical::dictionary::Dictionary;
use crate::lexical::index::{InMemoryInvertedIndex, InvertedIndex};
use crate::search::engine::SimpleSearchEngine;
use crate::search::ranker::{Ranker, SimpleRanker, TfIdfRanker};

/// Execute a CLI command.
pub fn execute_command(args: PilumArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the corpus and build the index described by `args`.
fn build_index(args: &IndexArgs) -> Result<(InMemoryCorpus, InMemoryInvertedIndex, u64)> {
    info!("Loading corpus from: {}", args.corpus.display());
    let corpus = InMemoryCorpus::from_jsonl_file(&args.corpus)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;

    let start_time = Instant::now();
    let index = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, args.config())?;
    let duration_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "Indexed {} documents in {}ms",
        corpus.size(),
        duration_ms
    );

    Ok((corpus, index, duration_ms))
}

/// Evaluate a query.
fn search_corpus(args: &SearchArgs, cli_args: &PilumArgs) -> Result<()> {
    let (corpus, index, _) = build_index(&args.index)?;
    let options = args.options();

    let mut ranker: Box<dyn Ranker + '_> = match args.ranker {
        RankerKind::Simple => Box::new(SimpleRanker::new()),
        RankerKind::Tfidf => Box::new(TfIdfRanker::new(&index, index.document_count())),
    };

    let distinct_terms = {
        let mut terms: Vec<String> = index.get_terms(&args.query).collect();
        terms.sort_unstable();
        terms.dedup();
        terms.len()
    };

    let start_time = Instant::now();
    let engine = SimpleSearchEngine::new(&corpus, &index);
    let hits = engine.evaluate(&args.query, &options, ranker.as_mut())?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    output_result(
        &SearchResults {
            query: args.query.clone(),
            distinct_terms,
            required_matches: options.required_matches(distinct_terms),
            ranker: ranker.name().to_string(),
            hits,
            duration_ms,
        },
        cli_args,
    )
}

/// Show posting list statistics.
fn show_stats(args: &StatsArgs, cli_args: &PilumArgs) -> Result<()> {
    let (_, index, build_duration_ms) = build_index(&args.index)?;
    let postings = index.statistics();

    output_result(
        &IndexStatistics {
            documents: index.document_count(),
            terms: index.dictionary().size(),
            compressed: index.config().compression.is_compressed(),
            bits_per_posting: postings.bits_per_posting(),
            postings,
            build_duration_ms,
            show_histograms: args.histograms,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::PilumError;

    fn corpus_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "Apples", "body": "apple pie with apple"}}"#).unwrap();
        writeln!(file, r#"{{"title": "Bananas", "body": "banana bread"}}"#).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_search_command_runs() {
        let file = corpus_file();
        let path = file.path().to_string_lossy().to_string();
        for ranker in ["simple", "tfidf"] {
            let args = PilumArgs::try_parse_from([
                "pilum", "-q", "--format", "json", "search", "--corpus", &path, "--fields",
                "title,body", "--query", "apple", "--ranker", ranker, "--compressed",
            ])
            .unwrap();
            execute_command(args).unwrap();
        }
    }

    #[test]
    fn test_stats_command_runs() {
        let file = corpus_file();
        let path = file.path().to_string_lossy().to_string();
        let args = PilumArgs::try_parse_from([
            "pilum", "-q", "stats", "--corpus", &path, "--histograms",
        ])
        .unwrap();
        execute_command(args).unwrap();
    }

    #[test]
    fn test_missing_corpus() {
        let args = PilumArgs::try_parse_from([
            "pilum",
            "stats",
            "--corpus",
            "/nonexistent/corpus.jsonl",
        ])
        .unwrap();
        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, PilumError::Anyhow(_)));
        let message = err.to_string();
        assert!(message.starts_with("failed to load corpus /nonexistent/corpus.jsonl: "));
    }

    #[test]
    fn test_invalid_threshold() {
        let file = corpus_file();
        let path = file.path().to_string_lossy().to_string();
        let args = PilumArgs::try_parse_from([
            "pilum", "search", "--corpus", &path, "--query", "apple", "--threshold=-1",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
