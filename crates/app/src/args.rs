use clap::{Args, Parser, Subcommand, ValueEnum};

use milestone_core::model::{AgeBand, Category};

use crate::logging::Verbosity;

/// Track developmental milestones per leap and category.
#[derive(Debug, Parser)]
#[command(name = "milestones", version, about, long_about = None)]
pub struct Cli {
    /// SQLite URL or file path for the response cache
    #[arg(
        long,
        global = true,
        env = "MILESTONES_DB_URL",
        default_value = "sqlite://milestones.sqlite3"
    )]
    pub db: String,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show completion percentages and completed leaps
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the questions of a leap with recorded answers
    Questions(QuestionsArgs),
    /// Answer one question
    Answer(AnswerArgs),
    /// Walk through a leap interactively (y/n, q to stop)
    Walk(WalkArgs),
    /// Remove every cached answer
    Clear,
}

#[derive(Debug, Args)]
pub struct QuestionsArgs {
    /// Leap number (1-10)
    #[arg(long, short)]
    pub band: AgeBand,

    /// Limit to one category (motor, sensory, communication, feeding)
    #[arg(long, short)]
    pub category: Option<Category>,
}

#[derive(Debug, Args)]
pub struct AnswerArgs {
    /// Leap number (1-10)
    #[arg(long, short)]
    pub band: AgeBand,

    /// Category of the question; defaults to motor
    #[arg(long, short)]
    pub category: Option<Category>,

    /// Zero-based question index within the category
    #[arg(long, short, default_value_t = 0)]
    pub index: usize,

    pub reply: Reply,
}

#[derive(Debug, Args)]
pub struct WalkArgs {
    /// Leap number (1-10)
    #[arg(long, short)]
    pub band: AgeBand,

    /// Start at this category instead of motor
    #[arg(long, short)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Reply {
    #[value(alias = "y")]
    Yes,
    #[value(alias = "n")]
    No,
}

impl Reply {
    #[must_use]
    pub fn as_bool(self) -> bool {
        matches!(self, Reply::Yes)
    }
}
