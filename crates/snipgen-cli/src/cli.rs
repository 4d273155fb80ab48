use clap::{Args, Parser, Subcommand, ValueEnum};
use snipgen_core::{Initials, KebabCase, PrefixStrategy, Verbatim};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "snipgen - helpers for authoring editor snippets",
    long_about = "snipgen wraps text into JSON snippet definitions and converts text blocks into array literals of quoted lines."
)]
pub struct Snipgen {
    #[clap(long, global = true, help = "Drop invalid UTF-8 bytes from the input instead of failing")]
    pub lossy: bool,

    #[clap(long, short, global = true, help = "Print debug logs to stderr")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the text as an array literal of quoted lines
    Array {
        #[clap(help = "The text, a path to a file holding it, or - for stdin")]
        text: String,
    },
    /// Wrap the text into a JSON snippet definition
    Snippet {
        #[clap(help = "The snippet body, a path to a file holding it, or - for stdin")]
        text: String,

        #[clap(long, short = 'n', help = "Name of the snippet")]
        name: String,

        #[clap(long, short = 'l', help = "Language the snippet is written for")]
        language: String,

        #[clap(long, short = 'p', help = "Trigger prefix (derived from the name when omitted)")]
        prefix: Option<String>,

        #[clap(long, short = 'd', help = "Description shown by the editor")]
        description: Option<String>,

        #[clap(long, value_enum, default_value_t = PrefixStyle::Kebab, help = "How to derive a missing prefix")]
        prefix_style: PrefixStyle,

        #[clap(long, short = 'w', help = "Merge into the language's snippet file instead of printing")]
        write: bool,

        #[clap(flatten)]
        location: Location,
    },
    /// List the snippet names in a language's snippet file
    List {
        #[clap(long, short = 'l', help = "Language of the snippet file")]
        language: String,

        #[clap(flatten)]
        location: Location,
    },
    /// Remove a snippet from a language's snippet file
    Remove {
        #[clap(long, short = 'n', help = "Name of the snippet to remove")]
        name: String,

        #[clap(long, short = 'l', help = "Language of the snippet file")]
        language: String,

        #[clap(flatten)]
        location: Location,
    },
}

#[derive(Args)]
pub struct Location {
    #[clap(long, short = 'o', help = "Directory holding the snippet files")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrefixStyle {
    /// "For Loop" -> "for-loop"
    Kebab,
    /// "For Loop" -> "fl"
    Initials,
    /// The name as-is
    Verbatim,
}

impl PrefixStyle {
    pub fn strategy(self) -> &'static dyn PrefixStrategy {
        match self {
            PrefixStyle::Kebab => &KebabCase,
            PrefixStyle::Initials => &Initials,
            PrefixStyle::Verbatim => &Verbatim,
        }
    }
}
