mod plot;
mod report;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use zipfian_core::model::config::AnalysisConfig;
use zipfian_core::model::frequency::analyze;
use zipfian_core::model::markov_chain::MarkovChain;
use zipfian_core::model::tokenizer::tokenize;
use zipfian_core::model::zipf_fit::fit_log_log;
use zipfian_core::read_text;

use plot::ZipfPlot;
use report::Report;

/// A simple word processing program to extract statistical information
/// from natural language in relation to computational linguistic models.
#[derive(Parser, Debug)]
#[command(name = "zipfian", disable_version_flag = true)]
struct Args {
    /// The file containing the natural language to process
    filename: PathBuf,
}

/// Seed of the sample walk, so the report is the same on every run.
const SAMPLE_SEED: u64 = 0x5eed;

/// Maximum number of words in the sample walk.
const SAMPLE_LEN: usize = 12;

/// Message printed when the input file cannot be read.
fn open_failure_message(path: &Path) -> String {
    // Two spaces before the file name
    format!("Unable to open file  {}", path.display())
}

/// Runs the whole pipeline on `text`.
///
/// Returns the console report and the plot to show. Fails before anything
/// is printed or drawn if a stage fails.
fn analyze_text(text: &str, config: &AnalysisConfig) -> Result<(String, ZipfPlot), Box<dyn Error>> {
    let tokens = tokenize(text);
    let analysis = analyze(&tokens)?;

    let (low, high) = config.fit_window();
    let fit = fit_log_log(&analysis.ranked, low, high)?;

    let chain = MarkovChain::from_tokens(&tokens);
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let sample = chain.walk(&analysis.ranked[0].word, SAMPLE_LEN, &mut rng);

    let report = Report::new(&analysis, &fit, &chain, &sample, config.top_words).to_string();
    Ok((report, ZipfPlot::new(&analysis, fit)))
}

/// Application entry point.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // The file is fully read and closed before any analysis starts
    let text = match read_text(&args.filename) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{e}");
            println!("{}", open_failure_message(&args.filename));
            return ExitCode::FAILURE;
        }
    };

    let (report, zipf_plot) = match analyze_text(&text, &AnalysisConfig::default()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{report}");
    match plot::show(zipf_plot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
