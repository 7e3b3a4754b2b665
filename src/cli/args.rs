use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::planner::{LearningStyle, Proficiency};

use super::commands;

/// Entry point for the `edugenie` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "edugenie",
    about = "Personalized learning plans with matching online courses",
    version,
    long_about = None
)]
pub struct Cli {
    /// Plan length in weeks (1, 2, 4, 8, 12, 16 or 24)
    #[arg(short = 'w', long = "weeks", default_value_t = 4)]
    pub weeks: u32,

    /// Preferred learning style
    #[arg(short = 's', long = "style", value_enum, default_value_t = LearningStyle::Mixed)]
    pub style: LearningStyle,

    /// Current proficiency with the topic
    #[arg(
        short = 'p',
        long = "proficiency",
        value_enum,
        default_value_t = Proficiency::CompleteBeginner
    )]
    pub proficiency: Proficiency,

    /// Print the plan as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Keep prompting for topics, reusing course results within the session
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Show the effective configuration and exit
    #[arg(long = "show-config")]
    pub show_config: bool,

    /// Topic to learn: the non-option words typed after `edugenie`
    pub topic: Vec<String>,
}

impl Cli {
    pub fn topic_text(&self) -> String {
        self.topic.join(" ").trim().to_owned()
    }

    pub async fn run(self, config: Config) -> Result<()> {
        commands::run(self, config).await
    }
}
