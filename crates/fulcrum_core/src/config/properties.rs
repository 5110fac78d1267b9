//! `.properties` text parser.
//!
//! Supports comment lines (`#`, `!`), `=`/`:`/whitespace separators, backslash
//! line continuations and the `\t \n \r \f \uXXXX` escapes. Lines may end in
//! `\n`, `\r\n` or a bare `\r`. Later duplicate keys replace earlier ones.

use super::{ConfigError, ConfigResult, Configuration};
use std::collections::BTreeMap;

/// Parses properties text loaded from `path`.
///
/// `path` is only used for error context.
///
/// # Errors
/// - Returns [`ConfigError::Parse`] for a malformed `\u` escape.
pub fn parse_properties(path: &str, text: &str) -> ConfigResult<Configuration> {
    let mut entries = BTreeMap::new();
    let text = text.replace("\r\n", "\n");
    let mut lines = text.split(['\n', '\r']).enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_number = index + 1;
        let trimmed = trim_leading_blank(raw);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(trim_leading_blank(next)),
                None => break,
            }
        }

        let (raw_key, raw_value) = split_entry(&logical);
        let key = unescape(raw_key, path, line_number)?;
        let value = unescape(raw_value, path, line_number)?;
        entries.insert(key, value);
    }

    Ok(Configuration::from_entries(entries))
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn trim_leading_blank(line: &str) -> &str {
    line.trim_start_matches(is_blank)
}

fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Splits a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (offset, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = offset;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = trim_leading_blank(&line[key_end..]);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = trim_leading_blank(stripped);
    }
    (key, rest)
}

fn unescape(raw: &str, path: &str, line: usize) -> ConfigResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars, path, line)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => read_code_unit(&mut chars, path, line)?,
                        _ => return Err(parse_error(path, line, "unpaired surrogate in \\u escape")),
                    };
                    char::decode_utf16([unit, low]).next().and_then(Result::ok)
                } else {
                    char::decode_utf16([unit]).next().and_then(Result::ok)
                };
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => return Err(parse_error(path, line, "invalid surrogate in \\u escape")),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>, path: &str, line: usize) -> ConfigResult<u16> {
    let digits = chars.by_ref().take(4).collect::<String>();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(parse_error(
            path,
            line,
            &format!("malformed \\uxxxx escape `\\u{digits}`"),
        ));
    }
    u16::from_str_radix(&digits, 16)
        .map_err(|err| parse_error(path, line, &format!("malformed \\uxxxx escape: {err}")))
}

fn parse_error(path: &str, line: usize, message: &str) -> ConfigError {
    ConfigError::Parse {
        path: path.to_string(),
        line,
        message: message.to_string(),
    }
}
