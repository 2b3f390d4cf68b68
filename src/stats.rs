use serde::Serialize;
use std::time::{Duration, Instant};

use crate::dispatch::{TransformDispatcher, TransformError, TransformRequest, TransformResult};
use crate::features::DigestProvider;

/// Timing and size metrics attached to a [`TransformResult`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransformStats {
    /// Wall-clock duration of the dispatch call, from a monotonic clock
    pub elapsed_ms: f64,
    /// UTF-16 code units in the input
    pub char_count_in: usize,
    /// UTF-16 code units in the output, 0 on failure
    pub char_count_out: usize,
    /// Line terminators in the input plus one
    pub line_count: usize,
}

impl TransformStats {
    fn collect(request: &TransformRequest, result: &TransformResult, elapsed: Duration) -> Self {
        TransformStats {
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            char_count_in: code_units(&request.input_text),
            char_count_out: result.output_text().map_or(0, code_units),
            line_count: count_lines(&request.input_text),
        }
    }
}

/// Length in UTF-16 code units, so astral characters count as two.
pub fn code_units(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Counts `\n`, `\r\n` and lone `\r` as one terminator each.
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut terminators = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                terminators += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => terminators += 1,
            _ => {}
        }
        i += 1;
    }

    terminators + 1
}

/// Wraps a dispatcher and measures every call.
#[derive(Debug)]
pub struct StatsCollector<'d, 'c, P> {
    dispatcher: &'d TransformDispatcher<'c, P>,
}

impl<'d, 'c, P: DigestProvider> StatsCollector<'d, 'c, P> {
    pub fn new(dispatcher: &'d TransformDispatcher<'c, P>) -> Self {
        Self { dispatcher }
    }

    pub fn measure(&self, request: &TransformRequest) -> TransformResult {
        let start = Instant::now();
        let mut result = self.dispatcher.transform(request);
        let elapsed = start.elapsed();

        result.stats = TransformStats::collect(request, &result, elapsed);

        log::trace!(
            "{} {}: {:.3} ms, {} -> {} chars",
            request.algorithm_id,
            request.mode.as_str(),
            result.stats.elapsed_ms,
            result.stats.char_count_in,
            result.stats.char_count_out
        );

        result
    }

    /// Attaches input stats to a request refused before dispatch, such as
    /// a decode the mode safeguard would not allow.
    pub fn reject(&self, request: &TransformRequest, error: TransformError) -> TransformResult {
        let start = Instant::now();
        let mut result = TransformResult::from_outcome(Err(error));
        result.stats = TransformStats::collect(request, &result, start.elapsed());

        log::trace!(
            "{} {}: rejected, {} chars in",
            request.algorithm_id,
            request.mode.as_str(),
            result.stats.char_count_in
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{ErrorKind, Mode};

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\ntwo"), 2);
        assert_eq!(count_lines("one\r\ntwo\r\n"), 3);
        assert_eq!(count_lines("a\rb\nc"), 3);
        assert_eq!(count_lines("\n\n"), 3);
    }

    #[test]
    fn test_measure_success() {
        let dispatcher = TransformDispatcher::new();
        let collector = StatsCollector::new(&dispatcher);
        let result = collector.measure(&TransformRequest::encode("base64", "héllo\nworld"));

        assert_eq!(result.output_text(), Some("aMOpbGxvCndvcmxk"));
        assert_eq!(result.stats.char_count_in, 11);
        assert_eq!(result.stats.char_count_out, 16);
        assert_eq!(result.stats.line_count, 2);
        assert!(result.stats.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_counts_utf16_code_units() {
        let dispatcher = TransformDispatcher::new();
        let collector = StatsCollector::new(&dispatcher);
        let result = collector.measure(&TransformRequest::encode("reverse", "🦀é"));

        assert_eq!(result.output_text(), Some("é🦀"));
        assert_eq!(result.stats.char_count_in, 3);
        assert_eq!(result.stats.char_count_out, 3);
        assert_eq!(code_units("𝄞𝄞"), 4);
    }

    #[test]
    fn test_safeguard_rejection_carries_input_stats() {
        let dispatcher = TransformDispatcher::new();
        let collector = StatsCollector::new(&dispatcher);
        let mut safeguard = crate::ModeSafeguard::new(dispatcher.catalog());
        safeguard.select("md5").unwrap();
        assert_eq!(safeguard.set_mode(Mode::Decode), Mode::Encode);

        let request = TransformRequest::decode("md5", "a🦀\nb");
        let error = TransformError::new(ErrorKind::IllegalModeForAlgorithm, "md5 is one-way");
        let result = collector.reject(&request, error);

        assert_eq!(
            result.error().map(|e| e.kind),
            Some(ErrorKind::IllegalModeForAlgorithm)
        );
        assert_eq!(result.stats.char_count_in, 5);
        assert_eq!(result.stats.char_count_out, 0);
        assert_eq!(result.stats.line_count, 2);
    }

    #[test]
    fn test_measure_failure_still_counts_input() {
        let dispatcher = TransformDispatcher::new();
        let collector = StatsCollector::new(&dispatcher);
        let result = collector.measure(&TransformRequest::decode("hex", "abc\ndef"));

        assert!(result.error().is_some());
        assert_eq!(result.stats.char_count_in, 7);
        assert_eq!(result.stats.char_count_out, 0);
        assert_eq!(result.stats.line_count, 2);
    }
}
