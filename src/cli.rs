//! Command line interface definition.
//!
//! Lives in the library rather than the binary so the xtask man page
//! generator can build the full command tree without linking the binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "safeyt",
    about = "Share YouTube videos with the unwanted parts cut out",
    version = crate::version_string(),
    after_help = concat!("Report issues at https://github.com/", env!("SAFEYT_REPO_NAME"))
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify a link and extract its video id
    Check {
        /// YouTube or SafeYT link
        link: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a shareable SafeYT link from a YouTube link
    Encode {
        /// YouTube watch or short link
        link: String,

        /// Skip a range, e.g. "1:30-2:05" (repeatable)
        #[arg(long = "skip", value_name = "START-END")]
        skips: Vec<String>,

        /// Trim everything before this time, e.g. "0:30"
        #[arg(long, value_name = "TIME")]
        from: Option<String>,

        /// Trim everything after this time, e.g. "9:45"
        #[arg(long, value_name = "TIME")]
        to: Option<String>,
    },

    /// Show the edit carried by a SafeYT link or bare token
    Decode {
        /// SafeYT link or bare token
        link: String,

        /// Print the payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Modify the edit carried by a SafeYT link
    Edit {
        /// SafeYT link to modify
        link: String,

        /// Add a skip, e.g. "1:30-2:05" (repeatable)
        #[arg(long = "add-skip", value_name = "START-END")]
        add_skips: Vec<String>,

        /// Delete a skip by its index as shown by decode (repeatable)
        #[arg(long = "delete-skip", value_name = "INDEX")]
        delete_skips: Vec<usize>,

        /// Set the start trim, e.g. "0:30"
        #[arg(long, value_name = "TIME")]
        from: Option<String>,

        /// Set the end trim, e.g. "9:45"
        #[arg(long, value_name = "TIME")]
        to: Option<String>,
    },

    /// Simulate playback of an edited video and print the timeline
    Play {
        /// SafeYT or YouTube link
        link: String,

        /// Video duration to assume, in seconds
        #[arg(long, value_name = "SECONDS")]
        duration: Option<f64>,

        /// Scrub to this time before playing, e.g. "1:00"
        #[arg(long, value_name = "TIME")]
        seek: Option<String>,

        /// Stop the simulation at this time, e.g. "5:00"
        #[arg(long, value_name = "TIME")]
        until: Option<String>,

        /// Pace ticks in real time instead of simulating instantly
        #[arg(long)]
        real_time: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}
