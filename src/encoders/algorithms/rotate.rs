//! Self-inverse rotation ciphers. Encoding and decoding are the same call.

/// Rotates Latin letters by 13, preserving case.
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

/// Rotates printable ASCII `!`..=`~` (33..=126) by 47.
pub fn rot47(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => (((c as u8 - b'!') + 47) % 94 + b'!') as char,
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rot13_known() {
        assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
        assert_eq!(rot13("abcxyzABCXYZ"), "nopklmNOPKLM");
        assert_eq!(rot13(""), "");
    }

    #[test]
    fn test_rot13_leaves_non_latin() {
        assert_eq!(rot13("ä 123 ß"), "ä 123 ß");
    }

    #[test]
    fn test_rot47_known() {
        assert_eq!(rot47("Hello, World!"), "w6==@[ (@C=5P");
        assert_eq!(rot47("!~"), "PO");
        assert_eq!(rot47("tab\there é"), "E23\t96C6 é");
    }

    #[test]
    fn test_self_inverse() {
        let text = "The Quick Brown Fox {jumps} over 42 lazy dogs ~ 世界";
        assert_eq!(rot13(&rot13(text)), text);
        assert_eq!(rot47(&rot47(text)), text);
    }
}
