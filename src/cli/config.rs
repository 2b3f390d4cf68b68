use hashcodec::Settings;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::global::GlobalArgs;

/// Load settings from the standard locations plus any `--config` file.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;
    if let Some(path) = &global.config {
        settings.apply_file(path)?;
    }
    if let Some(max_size) = global.max_size {
        settings.max_size = max_size;
    }
    Ok(settings)
}

fn check_size(size: usize, global: &GlobalArgs, settings: &Settings) -> Result<(), String> {
    if settings.max_size == 0 || size <= settings.max_size {
        return Ok(());
    }
    if global.force {
        if !global.quiet {
            log::warn!(
                "processing large input ({} bytes, limit: {} bytes)",
                size,
                settings.max_size
            );
        }
        return Ok(());
    }
    Err(format!(
        "input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
        size, settings.max_size
    ))
}

/// Read text input from a file or stdin, minus one trailing line terminator.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = if let Some(path) = file {
        // Check the size before reading the whole file
        let metadata = fs::metadata(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        check_size(metadata.len() as usize, global, settings)?;
        fs::read(path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        check_size(buffer.len(), global, settings)?;
        buffer
    };

    let mut text = String::from_utf8(bytes).map_err(|_| "input must be valid UTF-8 text")?;
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
    Ok(text)
}
