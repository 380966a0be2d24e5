use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Guess the language of a text from its letter frequencies
#[derive(Parser, Debug)]
#[command(name = "glotta", version)]
pub struct Cli {
    /// JSON config file, environment defaults are used when it does not exist
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank known languages by distance to the text
    Detect {
        #[command(flatten)]
        input: TextInput,

        /// Raw profile file, repeatable. Replaces the configured profiles
        #[arg(long = "profile", short = 'p')]
        profiles: Vec<PathBuf>,

        /// Directory of raw profiles. Replaces the configured directory
        #[arg(long)]
        profiles_dir: Option<PathBuf>,

        /// Print only the N closest languages
        #[arg(long)]
        top: Option<usize>,
    },

    /// Pick the closer of exactly two languages
    Compare {
        #[command(flatten)]
        input: TextInput,

        /// The two raw profile files to choose between
        #[arg(long = "profile", short = 'p', required = true)]
        profiles: Vec<PathBuf>,
    },

    /// Print the unigram profile of a text as JSON
    Profile {
        /// Language label of the profile
        #[arg(long, short = 'n')]
        name: String,

        #[command(flatten)]
        input: TextInput,
    },
}

/// Text given inline or read from a file
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TextInput {
    /// Text to analyze
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// File holding the text to analyze
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}
