use std::fmt;

use zipfian_core::model::frequency::Analysis;
use zipfian_core::model::markov_chain::MarkovChain;
use zipfian_core::model::zipf_fit::FitResult;

/// Rounds `value` to `digits` decimals and prints it in its shortest form.
///
/// Rounding works on the exact binary value with ties to even, so `0.25`
/// gives `0.2`. Whole numbers keep one decimal (`2.0`), other values drop
/// trailing zeros (`-1.05`).
pub fn rounded(value: f64, digits: usize) -> String {
    let fixed = format!("{:.*}", digits, value);
    let Ok(rounded) = fixed.parse::<f64>() else {
        return fixed;
    };
    let text = rounded.to_string();
    if rounded.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Console report of one analysis run.
pub struct Report<'a> {
    analysis: &'a Analysis,
    fit: &'a FitResult,
    chain: &'a MarkovChain,
    /// Words generated by a walk through `chain`.
    sample: &'a [String],
    top_words: usize,
}

impl<'a> Report<'a> {
    pub fn new(
        analysis: &'a Analysis,
        fit: &'a FitResult,
        chain: &'a MarkovChain,
        sample: &'a [String],
        top_words: usize,
    ) -> Self {
        Self { analysis, fit, chain, sample, top_words }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Word Analysis -----")?;
        writeln!(f, "  Unique words = {}", self.analysis.unique_count)?;
        writeln!(f, "  Rare words = {}", self.analysis.rare_count)?;
        writeln!(f, "  Most frequent words: ")?;
        for entry in self.analysis.top(self.top_words) {
            writeln!(
                f,
                "    {} (freq. =  {} %)",
                entry.word,
                rounded(entry.frequency * 100.0, 1)
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "  Linear Model: {} * x + {}",
            rounded(self.fit.slope, 3),
            rounded(self.fit.intercept, 3)
        )?;

        writeln!(f, "----- Markov Analysis -----")?;
        writeln!(f, "Starting Markov chain construction...")?;
        writeln!(f, "  {} words analyzed", self.analysis.token_count)?;
        writeln!(
            f,
            "  {} states, {} transitions",
            self.chain.state_count(),
            self.chain.transition_count()
        )?;
        writeln!(f, "  Sample: {}", self.sample.join(" "))?;
        writeln!(f, "Finished constructing the Markov chain matrix.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zipfian_core::model::frequency::analyze;
    use zipfian_core::model::tokenizer::tokenize;

    #[test]
    fn rounds_like_a_shortest_float() {
        assert_eq!(rounded(-1.0499999, 3), "-1.05");
        assert_eq!(rounded(2.0, 3), "2.0");
        assert_eq!(rounded(100.0 / 3.0, 1), "33.3");
        assert_eq!(rounded(12.96, 1), "13.0");
        assert_eq!(rounded(-0.0001, 3), "-0.0");
    }

    #[test]
    fn rounds_exact_ties_to_even() {
        // 1 occurrence in 400 tokens is exactly 0.25 %
        assert_eq!(rounded(1.0 / 400.0 * 100.0, 1), "0.2");
        assert_eq!(rounded(0.75, 1), "0.8");
        assert_eq!(rounded(-1.0625, 3), "-1.062");
        assert_eq!(rounded(2.5, 0), "2.0");
    }

    #[test]
    fn prints_full_report() {
        let tokens = tokenize("the cat sat on the mat");
        let analysis = analyze(&tokens).unwrap();
        let fit = FitResult { slope: -1.2344, intercept: -0.5, start: 0, end: 3 };
        let chain = MarkovChain::from_tokens(&tokens);
        let sample = vec!["the".to_owned(), "mat".to_owned()];

        // The header line ends with a space
        let expected = "\
----- Word Analysis -----
  Unique words = 5
  Rare words = 4
  Most frequent words:\x20
    the (freq. =  33.3 %)
    cat (freq. =  16.7 %)
    sat (freq. =  16.7 %)

  Linear Model: -1.234 * x + -0.5
----- Markov Analysis -----
Starting Markov chain construction...
  6 words analyzed
  4 states, 5 transitions
  Sample: the mat
Finished constructing the Markov chain matrix.
";
        assert_eq!(Report::new(&analysis, &fit, &chain, &sample, 3).to_string(), expected);
    }

    #[test]
    fn lists_fewer_words_than_requested_on_small_vocabulary() {
        let tokens = tokenize("echo echo");
        let analysis = analyze(&tokens).unwrap();
        let fit = FitResult { slope: 0.0, intercept: 0.0, start: 0, end: 0 };
        let chain = MarkovChain::from_tokens(&tokens);
        let sample = vec!["echo".to_owned()];

        let report = Report::new(&analysis, &fit, &chain, &sample, 5).to_string();
        assert!(report.contains("    echo (freq. =  100.0 %)\n\n"));
        assert!(report.contains("  Linear Model: 0.0 * x + 0.0\n"));
        assert!(report.contains("  1 states, 1 transitions\n"));
    }
}
