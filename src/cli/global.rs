use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the full transform result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print elapsed time and size metrics to stderr
    #[arg(long, global = true)]
    pub stats: bool,

    /// Maximum input size in bytes (0 = unlimited, overrides settings)
    #[arg(long, global = true)]
    pub max_size: Option<usize>,

    /// Process inputs exceeding the size limit
    #[arg(long, global = true)]
    pub force: bool,

    /// Extra settings file applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Default log filter from -q / -v
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }
}
