//! `$NAME` and `${NAME}` references inside dotenv files.
//!
//! dotenvy expands references while parsing, looking names up in the
//! process environment first. Overlay files must only see the snapshot
//! they are applied to, so every reference dotenvy would expand is masked
//! before parsing and expanded afterwards with [`expand`].

/// Stands in for a `$` that starts a reference.
const MARKER: char = '\u{E000}';

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Single,
    Double,
    Comment,
}

/// Replace every `$` that dotenvy would treat as a reference.
///
/// Quoting follows dotenvy: single-quoted text is literal, a backslash
/// escapes the next character elsewhere, and `#` after whitespace starts
/// a comment in unquoted text.
pub(crate) fn mask_references(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Unquoted;
    let mut escaped = false;
    let mut prev = '\n';

    for c in text.chars() {
        if escaped {
            escaped = false;
        } else {
            match state {
                State::Comment if c == '\n' => state = State::Unquoted,
                State::Single if c == '\'' => state = State::Unquoted,
                State::Comment | State::Single => {}
                State::Unquoted | State::Double if c == '\\' => escaped = true,
                State::Unquoted | State::Double if c == '$' => {
                    out.push(MARKER);
                    prev = c;
                    continue;
                }
                State::Double if c == '"' => state = State::Unquoted,
                State::Unquoted if c == '"' => state = State::Double,
                State::Unquoted if c == '\'' => state = State::Single,
                State::Unquoted if c == '#' && prev.is_whitespace() => state = State::Comment,
                State::Unquoted | State::Double => {}
            }
        }
        out.push(c);
        prev = c;
    }
    out
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Expand masked references in a parsed value.
///
/// Unknown names expand to the empty string. A marker not followed by a
/// name is written back as a literal `$`.
pub(crate) fn expand(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + MARKER.len_utf8()..];

        let reference = match rest.strip_prefix('{') {
            Some(braced) => braced
                .find('}')
                .map(|end| (&braced[..end], &braced[end + 1..])),
            None => {
                let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
                Some((&rest[..end], &rest[end..]))
            }
        };

        match reference {
            Some((name, after)) if !name.is_empty() => {
                out.push_str(&lookup(name).unwrap_or_default());
                rest = after;
            }
            _ => out.push('$'),
        }
    }

    out.push_str(rest);
    out
}
