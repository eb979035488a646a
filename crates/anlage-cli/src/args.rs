//! Command-line argument definitions for the Anlage CLI.

use clap::Parser;

/// Command-line arguments for the Anlage diagram annotator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input SVG diagram
    #[arg(
        help = "Path to the input SVG diagram",
        required_unless_present = "list"
    )]
    pub input: Option<String>,

    /// Disorder key to apply (see --list for available keys)
    #[arg(short, long, default_value = "NONE")]
    pub disorder: String,

    /// Path to the annotated output SVG file
    #[arg(short, long, default_value = "annotated.svg")]
    pub output: String,

    /// Print the text-panel payload (title + description) as JSON
    #[arg(long)]
    pub panel: bool,

    /// List the available disorder keys and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
