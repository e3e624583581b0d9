use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qtrack")]
#[command(about = "Topic-organized tracker for DSA practice questions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics with question counts and progress
    #[command(alias = "t")]
    Topics,

    /// List the questions for a topic
    #[command(alias = "ls")]
    List {
        /// Topic name (defaults to the first topic)
        topic: Option<String>,
    },

    /// Add a question to a topic
    #[command(alias = "a")]
    Add {
        /// Topic to file the question under
        topic: String,

        /// Question title (e.g. "Two Sum")
        title: String,

        /// Link to the question (scheme optional, https assumed)
        #[arg(short, long)]
        link: Option<String>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Remove a question from a topic
    #[command(alias = "rm")]
    Remove {
        /// Topic the question is filed under
        topic: String,

        /// Id of the question
        id: String,
    },

    /// Toggle a question between solved and unsolved
    #[command(alias = "solve")]
    Toggle {
        /// Id of the question
        id: String,
    },

    /// Show or set the color theme
    Theme {
        /// light or dark (prints the current theme if omitted)
        theme: Option<String>,
    },
}
