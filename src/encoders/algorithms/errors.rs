use std::fmt;

/// Errors that can occur while decoding text back to its original form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the codec's alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The padding is malformed or incorrect
    InvalidPadding,
    /// Invalid length for the encoding format
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// A `%XX` escape or bit group could not be parsed
    MalformedEscape { position: usize, sequence: String },
    /// The decoded bytes are not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    pub fn malformed_escape(position: usize, sequence: impl Into<String>) -> Self {
        DecodeError::MalformedEscape {
            position,
            sequence: sequence.into(),
        }
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DecodeError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                writeln!(f, "invalid character '{}' at position {}", c, position)?;
                writeln!(f)?;

                // Show input with caret pointing at error position
                let caret_offset = input.chars().take(*position).count();
                writeln!(f, "  {}", input)?;
                writeln!(f, "  {}^", " ".repeat(caret_offset))?;
                writeln!(f)?;

                let hint_chars = if valid_chars.chars().count() > 80 {
                    format!("{}...", valid_chars.chars().take(80).collect::<String>())
                } else {
                    valid_chars.clone()
                };
                write!(f, "hint: valid characters: {}", hint_chars)
            }
            DecodeError::InvalidPadding => {
                writeln!(f, "invalid padding")?;
                write!(
                    f,
                    "\nhint: check for missing or incorrect '=' characters at end of input"
                )
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint,
            } => {
                writeln!(f, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                write!(f, "hint: {}", hint)
            }
            DecodeError::MalformedEscape { position, sequence } => {
                write!(
                    f,
                    "malformed sequence '{}' at byte offset {}",
                    sequence, position
                )
            }
            DecodeError::InvalidUtf8 { valid_up_to } => {
                writeln!(f, "decoded bytes are not valid UTF-8")?;
                write!(
                    f,
                    "\nhint: the first {} bytes decode cleanly; the input may be binary data",
                    valid_up_to
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error when an algorithm id is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlgorithmNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlgorithmNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "algorithm '{}' not found", self.name)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nhint: did you mean '{}'?", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for AlgorithmNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching algorithm id
pub fn find_closest_algorithm<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.to_lowercase();
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(&name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base64", "base64"), 0);
        assert_eq!(levenshtein_distance("base64", "base32"), 2);
        assert_eq!(levenshtein_distance("bas64", "base64"), 1);
        assert_eq!(levenshtein_distance("", "sha256"), 6);
    }

    #[test]
    fn test_find_closest_algorithm() {
        let ids = ["base64", "base32", "hex", "sha256", "rot13"];

        assert_eq!(
            find_closest_algorithm("bas64", ids),
            Some("base64".to_string())
        );
        assert_eq!(
            find_closest_algorithm("SHA265", ids),
            Some("sha256".to_string())
        );
        assert_eq!(find_closest_algorithm("whirlpool", ids), None);
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_character('_', 12, "SGVsbG9faW52YWxpZA==", "A-Za-z0-9+/=");
        let display = err.to_string();

        assert!(display.contains("invalid character '_' at position 12"));
        assert!(display.contains("SGVsbG9faW52YWxpZA=="));
        assert!(display.contains("^"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_invalid_length_display() {
        let err = DecodeError::invalid_length(
            13,
            "multiple of 4",
            "add padding (=) or check for missing characters",
        );
        let display = err.to_string();

        assert!(display.contains("invalid length"));
        assert!(display.contains("13 characters"));
        assert!(display.contains("multiple of 4"));
    }

    #[test]
    fn test_utf8_conversion() {
        let err: DecodeError = String::from_utf8(vec![b'a', 0xff]).unwrap_err().into();
        assert_eq!(err, DecodeError::InvalidUtf8 { valid_up_to: 1 });
    }

    #[test]
    fn test_not_found_display() {
        let err = AlgorithmNotFoundError::new("bas64", Some("base64".to_string()));
        let display = err.to_string();

        assert!(display.contains("algorithm 'bas64' not found"));
        assert!(display.contains("did you mean 'base64'?"));
    }
}
