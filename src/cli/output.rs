//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, PilumArgs};
use crate::error::Result;
use crate::lexical::index::stats::PostingStats;
use crate::search::engine::SearchHit;

/// Results that know how to print themselves for a human reader.
pub trait HumanOutput {
    /// Print to stdout.
    fn print_human(&self, args: &PilumArgs);
}

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub distinct_terms: usize,
    pub required_matches: usize,
    pub ranker: String,
    pub hits: Vec<SearchHit>,
    pub duration_ms: u64,
}

/// Result structure for index statistics.
#[derive(Debug, Serialize)]
pub struct IndexStatistics {
    pub documents: usize,
    pub terms: usize,
    pub compressed: bool,
    pub bits_per_posting: Option<f64>,
    pub postings: PostingStats,
    pub build_duration_ms: u64,
    #[serde(skip)]
    pub show_histograms: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &PilumArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PilumArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for SearchResults {
    fn print_human(&self, args: &PilumArgs) {
        if args.verbosity() > 1 {
            println!(
                "Query {:?}: at least {} of {} terms, ranked by {}",
                self.query, self.required_matches, self.distinct_terms, self.ranker
            );
            println!();
        }

        println!("Search Results:");
        println!("═══════════════");

        for (i, hit) in self.hits.iter().enumerate() {
            println!();
            println!(
                "Result {}: document {} (Score: {:.3})",
                i + 1,
                hit.document_id,
                hit.score
            );
            println!("─────────────");

            if let Some(document) = &hit.document {
                let mut names = document.field_names();
                names.sort_unstable();
                for name in names {
                    println!("{name}: {}", document.get_field(name));
                }
            }
        }

        println!();
        println!("Total hits: {}", self.hits.len());
        if args.verbosity() > 0 {
            println!("Search time: {}ms", self.duration_ms);
        }
    }
}

impl HumanOutput for IndexStatistics {
    fn print_human(&self, args: &PilumArgs) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Documents: {}", self.documents);
        println!("Terms: {}", self.terms);
        println!("Postings: {}", self.postings.total_postings);
        println!(
            "Average posting list length: {:.2}",
            self.postings.avg_postings_per_list
        );
        println!(
            "Longest posting list: {}",
            self.postings.max_posting_list_size
        );

        if self.compressed {
            println!(
                "Compressed size: {}",
                format_bits(self.postings.compressed_bits)
            );
            if let Some(bits) = self.bits_per_posting {
                println!("Bits per posting: {bits:.2}");
            }
        }

        if args.verbosity() > 0 {
            println!("Build time: {}ms", self.build_duration_ms);
        }

        if self.show_histograms {
            print_histogram("Document-id gaps", &self.postings.gap_histogram);
            print_histogram("Term frequencies", &self.postings.frequency_histogram);
        }
    }
}

fn print_histogram(title: &str, histogram: &std::collections::BTreeMap<u64, usize>) {
    println!();
    println!("{title}:");
    println!("────────────────");
    for (value, count) in histogram {
        println!("{value:>10} {count:>10}");
    }
}

/// Format a bit count as a human-readable size.
fn format_bits(bits: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bits as f64 / 8.0;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bits} bits ({size:.0} {})", UNITS[unit])
    } else {
        format!("{bits} bits ({size:.1} {})", UNITS[unit])
    }
}
