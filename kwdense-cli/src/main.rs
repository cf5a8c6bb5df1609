use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use kwdense_core::analyzer::{analyze_batch, AnalyzerConfig, CandidateKeyword, SubstringDensityAnalyzer};
use kwdense_core::ranking::{generate_ranking, RankingEntry};
use kwdense_core::{io, keywords};

/// Keyword density tools.
#[derive(Parser)]
#[command(name = "kwdense", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the substrings of a text by density
    Analyze(AnalyzeArgs),
    /// Print a mocked phone model popularity ranking
    Ranking {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the preset keyword library
    Keywords {
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Text to analyze
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Analyze each line of --file separately
    #[arg(long, requires = "file")]
    lines: bool,

    #[arg(long, default_value_t = 10)]
    top_k: usize,

    #[arg(long, default_value_t = 2)]
    min_count: usize,

    #[arg(long, default_value_t = 2)]
    min_word_len: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(args)?,
        Command::Ranking { seed, json } => {
            let ranking = match seed {
                Some(seed) => generate_ranking(&mut StdRng::seed_from_u64(seed)),
                None => generate_ranking(&mut rand::rng()),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&ranking)?);
            } else {
                print_ranking(&ranking);
            }
        }
        Command::Keywords { category } => {
            let words = match category {
                Some(c) => keywords::keywords_by_category(&c),
                None => keywords::keywords(),
            };
            for word in words {
                println!("{word}");
            }
        }
    }

    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::new(args.min_word_len, args.min_count, args.top_k)?;
    let analyzer = SubstringDensityAnalyzer::new(config);

    // One result per input text
    let results: Vec<Vec<CandidateKeyword>> = match (&args.file, args.lines) {
        (Some(path), true) => {
            let lines = io::read_lines(path)?;
            debug!("Read {} lines from {}", lines.len(), path.display());
            analyze_batch(&analyzer, &lines)
        }
        (Some(path), false) => vec![analyzer.analyze(&io::read_text(path)?)],
        (None, _) => match args.text {
            Some(text) => vec![analyzer.analyze(&text)],
            None => return Err("Provide a TEXT argument or --file".into()),
        },
    };

    if args.json {
        println!("{}", render_json(&results, args.lines)?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if args.lines {
            println!("# line {}", i + 1);
        }
        print_keywords(result);
    }
    Ok(())
}

/// One array per line with `--lines`, a single array otherwise.
fn render_json(results: &[Vec<CandidateKeyword>], lines: bool) -> serde_json::Result<String> {
    if lines {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string_pretty(results.first().map_or(&[][..], Vec::as_slice))
    }
}

fn print_keywords(result: &[CandidateKeyword]) {
    if result.is_empty() {
        println!("No keyword found");
        return;
    }
    for (rank, candidate) in result.iter().enumerate() {
        println!(
            "{:>2}. {}  count: {}  density: {:.2}%",
            rank + 1,
            candidate.word,
            candidate.count,
            candidate.density
        );
    }
}

fn print_ranking(ranking: &[RankingEntry]) {
    for (rank, entry) in ranking.iter().enumerate() {
        println!("{:>2}. {}  {}", rank + 1, entry.word, entry.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lines_requires_file() {
        assert!(Cli::try_parse_from(["kwdense", "analyze", "--lines"]).is_err());
        assert!(Cli::try_parse_from(["kwdense", "analyze", "--lines", "--file", "in.txt"]).is_ok());
    }

    #[test]
    fn text_conflicts_with_file() {
        assert!(Cli::try_parse_from(["kwdense", "analyze", "ababab", "--file", "in.txt"]).is_err());
    }

    #[test]
    fn json_shape_follows_lines_flag() {
        let analyzer = SubstringDensityAnalyzer::default();
        let single = vec![analyzer.analyze("ababab")];

        let flat: serde_json::Value = serde_json::from_str(&render_json(&single, false).unwrap()).unwrap();
        assert_eq!(flat[0]["word"], "abab");

        // A one-line file still yields an array of arrays
        let nested: serde_json::Value = serde_json::from_str(&render_json(&single, true).unwrap()).unwrap();
        assert_eq!(nested.as_array().unwrap().len(), 1);
        assert_eq!(nested[0][0]["word"], "abab");
        assert_eq!(render_json(&[], true).unwrap(), "[]");
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let cli = Cli::try_parse_from(["kwdense", "analyze", "ababab", "--top-k", "0"]).unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(run_analyze(args).is_err());
    }
}
