use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

fn version_string() -> &'static str {
    use once_cell::sync::Lazy;
    static VERSION_STRING: Lazy<String> = Lazy::new(|| {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        const GIT_HASH: &str = env!("GIT_HASH");
        const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    });
    &VERSION_STRING
}

#[derive(Parser, Debug)]
#[command(name = "preamble")]
#[command(about = "Front-matter automation for static-site content", long_about = None)]
#[command(version = version_string())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content root holding blog/ and diary/
    #[arg(long, global = true, default_value = "src/content")]
    pub root: PathBuf,

    /// Model endpoints file (defaults to ./models.yaml)
    #[arg(long, global = true)]
    pub models: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Blog,
    Diary,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in missing front matter for existing entries
    #[command(alias = "p")]
    Process {
        /// Content kind to process
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Generate everything, never prompt
        #[arg(long)]
        auto: bool,
    },

    /// Stamp diary entries with their creation time
    Stamp,

    /// Scaffold a new entry
    #[command(alias = "n")]
    New {
        /// Kind of entry to create
        #[arg(value_enum)]
        kind: KindArg,

        #[command(flatten)]
        scaffold: ScaffoldArgs,
    },
}

#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Entry title (prompted for when omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// Summary, 30 chars or fewer (blog only)
    #[arg(long)]
    pub summary: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Weather, text or emoji
    #[arg(long)]
    pub weather: Option<String>,

    /// Mood, text or emoji
    #[arg(long)]
    pub mood: Option<String>,

    /// Mood rating, 1-5
    #[arg(long)]
    pub rating: Option<i64>,

    /// File name, extension optional
    #[arg(long)]
    pub filename: Option<String>,

    /// Mark the entry as a draft (blog only)
    #[arg(long)]
    pub draft: bool,
}
