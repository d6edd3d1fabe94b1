// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-primer")]
#[command(about = "Graded scene-graph demos on one parameterized core", long_about = None)]
pub struct Cli {
    /// Sample preset to run
    #[arg(long, default_value = "mixed")]
    pub sample: String,

    /// Override the preset's surface width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the preset's surface height
    #[arg(long)]
    pub height: Option<u32>,

    /// List available sample presets and exit
    #[arg(long, default_value = "false")]
    pub list: bool,

    /// Print the resolved sample configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,
}
