/// Escape a string so it renders as literal text when inserted into HTML.
///
/// This function escapes:
/// - Ampersand (`&`)
/// - Angle brackets (`<`, `>`)
/// - Double and single quotes, so the result is also safe inside quoted
///   attribute values
///
/// # Examples
///
/// ```
/// use casoon_util::strings::escape_html;
///
/// assert_eq!(
///     escape_html("<script>alert(\"xss\")</script>"),
///     "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
/// );
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };

        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}
