//! CLI argument definitions using clap.

use clap::Parser;

/// Fetch and switch remote kubeconfig contexts.
#[derive(Parser, Debug)]
#[command(name = "kubectx-git")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation words (e.g. `version`)
    #[arg(value_name = "OPERATION")]
    pub args: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_words_collect_in_order() {
        let cli = Cli::try_parse_from(["kubectx-git", "version", "extra"]).unwrap();
        assert_eq!(cli.args, vec!["version".to_string(), "extra".to_string()]);
    }

    #[test]
    fn flags_do_not_consume_operation_words() {
        let cli = Cli::try_parse_from(["kubectx-git", "--verbose", "version"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.args, vec!["version".to_string()]);
    }

    #[test]
    fn no_arguments_parses_to_empty_word_list() {
        let cli = Cli::try_parse_from(["kubectx-git"]).unwrap();
        assert!(cli.args.is_empty());
    }
}
