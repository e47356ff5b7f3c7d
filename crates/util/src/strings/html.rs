/// Remove markup from a string, keeping only its text content.
///
/// Tags, comments, doctypes and processing instructions are dropped and
/// character references are decoded. A `<` that cannot start a tag (as in
/// `a < b`) is kept as text, and unknown entities are left verbatim.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::strip_html;
///
/// assert_eq!(strip_html("<p>Hello <strong>world</strong>!</p>"), "Hello world!");
/// assert_eq!(strip_html("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(strip_html("1 < 2"), "1 < 2");
/// ```
pub fn strip_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            match markup_len(rest) {
                Some(len) => rest = &rest[len..],
                None => {
                    out.push('<');
                    rest = &rest[1..];
                }
            }
        } else {
            match decode_entity(rest) {
                Some((decoded, len)) => {
                    out.push(decoded);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }

    out.push_str(rest);
    out
}

/// Byte length of the markup construct starting at `s[0] == '<'`, or `None`
/// when the `<` is plain text. Unterminated markup swallows the rest of the input.
fn markup_len(s: &str) -> Option<usize> {
    if let Some(body) = s.strip_prefix("<!--") {
        return Some(body.find("-->").map_or(s.len(), |end| 4 + end + 3));
    }

    let next = s[1..].chars().next()?;
    if next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?') {
        Some(s.find('>').map_or(s.len(), |end| end + 1))
    } else {
        None
    }
}

/// Decode the character reference at the start of `s` (`s[0] == '&'`).
///
/// Returns the decoded character and the number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let end = s.find(';')?;
    let body = &s[1..end];
    if body.is_empty() || body.len() > 10 {
        return None;
    }

    let decoded = if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{00A0}',
            "copy" => '©',
            "reg" => '®',
            "hellip" => '…',
            "mdash" => '—',
            "ndash" => '–',
            _ => return None,
        }
    };

    Some((decoded, end + 1))
}
