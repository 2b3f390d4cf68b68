use hashcodec::{TransformResult, TransformStats};
use std::io::IsTerminal;

/// Check if colored output should be used
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Print an error to stderr with `error:` / `hint:` prefixes.
pub fn print_error(err: &dyn std::error::Error, use_color: bool) {
    let message = err.to_string();
    let (error_prefix, hint_prefix) = if use_color {
        ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
    } else {
        ("error:", "hint:")
    };

    let mut lines = message.lines();
    if let Some(first) = lines.next() {
        eprintln!("{} {}", error_prefix, first);
    }
    for line in lines {
        match line.strip_prefix("hint:") {
            Some(rest) => eprintln!("{}{}", hint_prefix, rest),
            None => eprintln!("{}", line),
        }
    }
}

pub fn print_stats(stats: &TransformStats) {
    eprintln!(
        "{:.3} ms, {} chars in, {} chars out, {} lines",
        stats.elapsed_ms, stats.char_count_in, stats.char_count_out, stats.line_count
    );
}

pub fn print_json(result: &TransformResult) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Marker for failures whose details were already written to stdout.
#[derive(Debug)]
pub struct AlreadyReported;

impl std::fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transform failed")
    }
}

impl std::error::Error for AlreadyReported {}
