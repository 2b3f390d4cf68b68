use crate::cli::{
    args::TransformArgs,
    config::read_input,
    global::GlobalArgs,
    output::{AlreadyReported, print_json, print_stats},
};
use hashcodec::{
    AlgorithmCatalog, Category, ErrorKind, Mode, ModeSafeguard, Settings, StatsCollector,
    TransformDispatcher, TransformError, TransformRequest,
};
use std::fs;

/// Which subcommand asked for the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encode,
    Decode,
    Hash,
}

impl Action {
    fn mode(self) -> Mode {
        match self {
            Action::Decode => Mode::Decode,
            Action::Encode | Action::Hash => Mode::Encode,
        }
    }
}

pub fn handle(
    action: Action,
    args: TransformArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let requested = args
        .algorithm
        .as_deref()
        .unwrap_or(settings.default_algorithm.as_str());
    let algorithm_id = settings.resolve_alias(requested);

    let input = read_input(args.file.as_deref(), global, settings)?;
    let request = TransformRequest::new(algorithm_id, action.mode(), input);

    let dispatcher = TransformDispatcher::new();
    let collector = StatsCollector::new(&dispatcher);
    let result = match prepare(dispatcher.catalog(), action, requested, &request) {
        Ok(prepared) => collector.measure(&prepared),
        Err(error) => collector.reject(&request, error),
    };

    if global.json {
        print_json(&result)?;
        return match result.error() {
            Some(_) => Err(Box::new(AlreadyReported)),
            None => Ok(()),
        };
    }

    if global.stats || settings.show_stats {
        print_stats(&result.stats);
    }

    let output = result.into_outcome()?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))
                .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
            log::info!("wrote {} bytes to {}", output.len() + 1, path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

/// Runs the selection through the mode safeguard so a one-way algorithm
/// can never be asked to decode.
fn prepare(
    catalog: &AlgorithmCatalog,
    action: Action,
    requested: &str,
    request: &TransformRequest,
) -> Result<TransformRequest, TransformError> {
    let mut safeguard = ModeSafeguard::new(catalog);
    safeguard
        .select(&request.algorithm_id)
        .map_err(|e| TransformError::new(ErrorKind::UnsupportedAlgorithm, e.to_string()))?;
    let descriptor = safeguard
        .active()
        .ok_or_else(|| TransformError::new(ErrorKind::EncodingError, "no algorithm selected"))?;

    if action == Action::Hash && descriptor.category != Category::Hash {
        return Err(TransformError::new(
            ErrorKind::UnsupportedAlgorithm,
            format!(
                "'{}' is not a hash algorithm\nhint: use 'encode' for reversible algorithms",
                requested
            ),
        ));
    }

    let wanted = request.mode;
    if safeguard.set_mode(wanted) != wanted {
        return Err(TransformError::new(
            ErrorKind::IllegalModeForAlgorithm,
            format!(
                "'{}' is a one-way function and cannot {}",
                descriptor.id,
                wanted.as_str()
            ),
        ));
    }

    safeguard
        .request(request.input_text.as_str())
        .ok_or_else(|| TransformError::new(ErrorKind::EncodingError, "no algorithm selected"))
}
