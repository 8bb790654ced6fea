use crate::types::{LogLevel, OutputFormat, ViewStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moonshot")]
#[command(about = "Browse the Apollo missions and their crews", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory holding config.toml [default: $MOONSHOT_PATH or XDG data dir]")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Directory with astronauts.json and missions.json to use instead of the bundled data")]
    pub resources: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive mission browser (default)
    Browse {
        #[arg(long, help = "Initial layout of the mission list")]
        view: Option<ViewStyle>,
    },

    /// Print every mission as a grid or a list
    Missions {
        #[arg(long)]
        view: Option<ViewStyle>,
    },

    /// Show one mission with its highlights and crew
    Mission {
        /// Mission number, e.g. 11 for Apollo 11
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Show an astronaut's biography
    Astronaut {
        /// Astronaut id (e.g. "armstrong") or full name
        key: String,
    },

    /// Check that every crew entry refers to a known astronaut
    Validate,
}
