//! Wordle Suggest CLI
//!
//! Serves suggestions over HTTP, answers one-off queries from the command
//! line, or launches two servers side by side.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_suggest::launcher::{self, ServerSpec};
use wordle_suggest::{server, suggest_words, Constraints, Dictionary, FeedbackPattern, Letter, Word};

#[derive(Debug, Parser)]
#[command(name = "wordle-suggest", version, about = "Suggest Wordle answers consistent with your guesses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve POST /suggest over HTTP
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 6500)]
        port: u16,
        #[command(flatten)]
        words: WordListArgs,
    },
    /// Print the words matching explicit choices
    Query {
        #[command(flatten)]
        words: WordListArgs,
        /// A letter known at a position, as POSITION=LETTER (0-based). Repeatable.
        #[arg(long, value_parser = parse_green)]
        green: Vec<(usize, Letter)>,
        /// Letters known to be in the word, position unknown.
        #[arg(long, default_value = "")]
        yellow: String,
        /// Letters known not to be in the word.
        #[arg(long, default_value = "")]
        gray: String,
    },
    /// Print the words matching guesses and their feedback, e.g. crane:gybbb
    Guess {
        #[command(flatten)]
        words: WordListArgs,
        #[arg(required = true, value_parser = parse_guess)]
        guesses: Vec<(Word, FeedbackPattern)>,
    },
    /// Run two servers on different ports for side-by-side comparison
    Both {
        #[command(flatten)]
        words: WordListArgs,
        #[arg(long, default_value_t = 6500)]
        first_port: u16,
        #[arg(long, default_value_t = 6501)]
        second_port: u16,
        /// Server program for the first port; defaults to this program.
        #[arg(long)]
        first_binary: Option<PathBuf>,
        /// Server program for the second port; defaults to this program.
        #[arg(long)]
        second_binary: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct WordListArgs {
    /// List of candidate words. One word per line.
    #[arg(long = "word_list_path", visible_alias = "word-list-path")]
    word_list_path: PathBuf,
}

impl WordListArgs {
    fn load(&self) -> Result<Dictionary> {
        let dictionary = Dictionary::load(&self.word_list_path)
            .with_context(|| format!("failed to load {}", self.word_list_path.display()))?;
        info!(words = dictionary.len(), path = %self.word_list_path.display(), "loaded dictionary");
        Ok(dictionary)
    }
}

fn parse_green(s: &str) -> Result<(usize, Letter), String> {
    let (position, letter) = s
        .split_once('=')
        .ok_or_else(|| format!("expected POSITION=LETTER, found {s:?}"))?;
    let position = position
        .trim()
        .parse()
        .map_err(|_| format!("{position:?} is not a position"))?;
    let mut chars = letter.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((position, Letter::try_from(c).map_err(|e| e.to_string())?)),
        _ => Err(format!("expected a single letter, found {letter:?}")),
    }
}

fn parse_guess(s: &str) -> Result<(Word, FeedbackPattern), String> {
    let (word, pattern) = s
        .split_once(':')
        .ok_or_else(|| format!("expected GUESS:PATTERN, found {s:?}"))?;
    let word = Word::parse(word).map_err(|e| format!("{word:?}: {e}"))?;
    let pattern = FeedbackPattern::parse(pattern)
        .ok_or_else(|| format!("invalid pattern {pattern:?}; use g=green, y=yellow, b=black"))?;
    Ok((word, pattern))
}

fn letters(s: &str) -> Result<Vec<Letter>> {
    s.chars()
        .map(|c| Letter::try_from(c).map_err(|e| anyhow!(e)))
        .collect()
}

fn print_words(dictionary: &Dictionary, constraints: &Constraints) {
    let words = suggest_words(dictionary, constraints);
    if words.is_empty() {
        println!("{}", wordle_suggest::wire::NO_WORDS_MESSAGE);
        return;
    }
    for word in &words {
        println!("{}", word);
    }
    info!(count = words.len(), "suggested words");
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { port, words } => {
            let dictionary = Arc::new(words.load()?);
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime
                .block_on(server::serve(dictionary, port))
                .with_context(|| format!("failed to serve on port {port}"))
        }
        Command::Query {
            words,
            green,
            yellow,
            gray,
        } => {
            let dictionary = words.load()?;
            let constraints = Constraints::new(green, letters(&yellow)?, letters(&gray)?)?;
            print_words(&dictionary, &constraints);
            Ok(())
        }
        Command::Guess { words, guesses } => {
            let dictionary = words.load()?;
            let mut builder = Constraints::builder();
            for (guess, pattern) in &guesses {
                println!("{} {}", guess, pattern);
                builder.record_guess(guess, *pattern);
            }
            let constraints = builder.build()?;
            print_words(&dictionary, &constraints);
            Ok(())
        }
        Command::Both {
            words,
            first_port,
            second_port,
            first_binary,
            second_binary,
        } => {
            let this = std::env::current_exe().context("failed to locate this program")?;
            let spec = |binary: Option<PathBuf>, port: u16| match binary {
                Some(binary) => ServerSpec {
                    binary,
                    port,
                    word_list_path: words.word_list_path.clone(),
                    subcommand: None,
                },
                None => ServerSpec {
                    binary: this.clone(),
                    port,
                    word_list_path: words.word_list_path.clone(),
                    subcommand: Some("serve".to_string()),
                },
            };
            launcher::launch_both(spec(first_binary, first_port), spec(second_binary, second_port))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
