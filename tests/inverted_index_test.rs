//! Integration tests for index construction.

use std::io::Cursor;

use pilum::analysis::normalizer::DummyNormalizer;
use pilum::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use pilum::lexical::dictionary::Dictionary;
use pilum::prelude::*;
use std::sync::Arc;

const CORPUS: &str = r#"
{"title": "Tolkien", "body": "The Lord of the Rings"}
{"title": "Herbert", "body": "Dune", "year": 1965}
{"title": "Le Guin", "body": "The Left Hand of Darkness"}
"#;

fn corpus() -> InMemoryCorpus {
    InMemoryCorpus::from_jsonl_reader(Cursor::new(CORPUS)).unwrap()
}

fn config(compression: CompressionConfig) -> InvertedIndexConfig {
    InvertedIndexConfig::new(["title", "body"]).with_compression(compression)
}

#[test]
fn test_build_is_deterministic() -> Result<()> {
    let corpus = corpus();
    let first = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, config(CompressionConfig::None))?;
    let second = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, config(CompressionConfig::None))?;

    let ids = |index: &InMemoryInvertedIndex| -> Vec<(String, u64)> {
        index
            .dictionary()
            .iter()
            .map(|(term, id)| (term.to_string(), id))
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.to_map(), second.to_map());
    for term in first.get_indexed_terms() {
        assert_eq!(
            first.get_document_frequency(term),
            second.get_document_frequency(term)
        );
        assert_eq!(
            first.get_collection_frequency(term),
            second.get_collection_frequency(term)
        );
    }
    Ok(())
}

#[test]
fn test_frequencies() -> Result<()> {
    let corpus = corpus();
    let index = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, config(CompressionConfig::compressed()))?;

    assert_eq!(index.get_document_frequency("the"), 2);
    assert_eq!(index.get_collection_frequency("the"), 3);
    assert_eq!(index.get_document_frequency("of"), 2);
    assert_eq!(index.get_document_frequency("dune"), 1);
    // "year" is not an indexed field.
    assert_eq!(index.get_document_frequency("1965"), 0);
    assert_eq!(index.get_postings_iterator("1965").count(), 0);
    Ok(())
}

#[test]
fn test_postings_are_sorted() -> Result<()> {
    let corpus = corpus();
    let index = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, config(CompressionConfig::compressed()))?;

    for term in index.get_indexed_terms() {
        let ids: Vec<u64> = index.get_postings_iterator(term).map(|p| p.document_id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{term}: {ids:?}");
        assert_eq!(ids.len(), index.get_document_frequency(term));
    }
    Ok(())
}

#[test]
fn test_custom_analyzer() -> Result<()> {
    let corpus = corpus();
    let analyzer = Analyzer::new(Arc::new(DummyNormalizer), Arc::new(UnicodeWordTokenizer::new()));
    let index = InMemoryInvertedIndex::build(&corpus, analyzer, config(CompressionConfig::None))?;

    // No lowercasing.
    assert_eq!(index.get_document_frequency("The"), 2);
    assert_eq!(index.get_document_frequency("the"), 1);
    Ok(())
}

#[test]
fn test_statistics_agree_across_representations() -> Result<()> {
    let corpus = corpus();
    let plain = InMemoryInvertedIndex::build(&corpus, Analyzer::simple()?, config(CompressionConfig::None))?;
    let compressed = InMemoryInvertedIndex::build(
        &corpus,
        Analyzer::simple()?,
        config(CompressionConfig::Compressed {
            gap_codec: CodecKind::VariableByte,
            frequency_codec: CodecKind::EliasGamma,
        }),
    )?;

    let plain_stats = plain.statistics();
    let compressed_stats = compressed.statistics();
    assert_eq!(plain_stats.total_postings, compressed_stats.total_postings);
    assert_eq!(plain_stats.gap_histogram, compressed_stats.gap_histogram);
    assert_eq!(plain_stats.frequency_histogram, compressed_stats.frequency_histogram);
    assert_eq!(plain_stats.compressed_bits, 0);
    assert!(compressed_stats.compressed_bits > 0);
    Ok(())
}

#[test]
fn test_config_from_json() {
    let config: InvertedIndexConfig = serde_json::from_str(
        r#"{"fields": ["title"], "compression": {"type": "compressed", "gap_codec": "oneshot", "frequency_codec": "variable_byte"}}"#,
    )
    .unwrap();
    assert_eq!(config.fields, vec!["title"]);
    assert_eq!(
        config.compression,
        CompressionConfig::Compressed {
            gap_codec: CodecKind::Oneshot,
            frequency_codec: CodecKind::VariableByte,
        }
    );

    let config: InvertedIndexConfig = serde_json::from_str(r#"{"fields": ["body"]}"#).unwrap();
    assert_eq!(config.compression, CompressionConfig::None);
}
