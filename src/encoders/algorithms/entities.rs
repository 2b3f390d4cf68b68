//! HTML entity escaping.

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
];

// Longest entity body we bother scanning for, e.g. "#x10FFFF"
const MAX_ENTITY_LEN: usize = 10;

pub fn encode_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

fn is_digits(s: &str, digit: fn(&u8) -> bool) -> bool {
    !s.is_empty() && s.bytes().all(|b| digit(&b))
}

fn resolve_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) if is_digits(hex, u8::is_ascii_hexdigit) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if is_digits(numeric, u8::is_ascii_digit) => numeric.parse::<u32>().ok()?,
            _ => return None,
        };
        // Rejects surrogates and anything past U+10FFFF
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|&(_, c)| c)
}

/// Unrecognized entities are copied through unchanged; this never fails.
pub fn decode_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let resolved = after
            .char_indices()
            .take(MAX_ENTITY_LEN + 1)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| resolve_entity(&after[..semi]).map(|c| (c, semi)));

        match resolved {
            Some((c, semi)) => {
                result.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                result.push('&');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
