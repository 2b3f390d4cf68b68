/// Reverses Unicode scalar values. A combining mark lands in front of its
/// original base and attaches to whatever character followed that base;
/// graphemes are not preserved.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_text("hello"), "olleh");
        assert_eq!(reverse_text("世界🦀"), "🦀界世");
        assert_eq!(reverse_text(""), "");
    }

    #[test]
    fn test_combining_mark_moves_to_following_character() {
        assert_eq!(reverse_text("e\u{301}x"), "x\u{301}e");
    }

    #[test]
    fn test_involution() {
        let text = "e\u{301}tude";
        assert_eq!(reverse_text(&reverse_text(text)), text);
    }
}
