use std::path::PathBuf;

use clap::Parser;

/// Upload your resume and a job description to find your skill gaps.
#[derive(Debug, Parser)]
#[command(name = "pathup", version)]
pub struct Cli {
    /// Resume file to analyze (PDF, PNG, JPG).
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Job description text.
    #[arg(long, value_name = "TEXT", conflicts_with = "jd_file")]
    pub jd: Option<String>,

    /// Read the job description from a file.
    #[arg(long, value_name = "PATH")]
    pub jd_file: Option<PathBuf>,

    /// Analysis service endpoint; overrides the settings file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Settings file in RON format.
    #[arg(long, value_name = "PATH", default_value = "pathup.ron")]
    pub config: PathBuf,

    /// Keep the form open and read commands from stdin.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print recommendation links as `title <url>` instead of terminal hyperlinks.
    #[arg(long)]
    pub plain: bool,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
