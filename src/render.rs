//! Heading-text normalization and outline rendering.
//!
//! The core transformation: the ordered heading tokens of one file become an
//! indented markdown bullet list, one `[text](path#slug)` link per heading.

use crate::outline::HeadingToken;
use crate::utils::encode_uri;

/// Fixed bullet cycle. Levels outside 1..=4 keep their line and indentation
/// but get no visible marker.
fn bullet_for_level(level: u32) -> &'static str {
    match level {
        1 => "-",
        2 => "*",
        3 => "+",
        4 => "-",
        _ => "",
    }
}

/// Strips link and decoration syntax from raw heading text.
///
/// Order matters: trailing parenthetical content is cut from the *last* `(`
/// first, then a surviving `[label]` wrapper is unwrapped to its label. Text
/// with neither passes through unchanged. A `[` without a matching `]` after
/// it leaves the text as is instead of extracting a nonsensical range.
pub fn normalize_heading(raw: &str) -> String {
    let truncated = match raw.rfind('(') {
        Some(paren) => &raw[..paren],
        None => raw,
    };

    if let Some(open) = truncated.find('[') {
        if let Some(close) = truncated.rfind(']') {
            if close > open {
                return truncated[open + 1..close].to_string();
            }
        }
    }

    truncated.to_string()
}

/// Renders the outline of one file as an indented bullet list of links.
///
/// One line per token, in token order; no token is dropped, whatever its
/// level. Each line is indented by two spaces per heading level and links to
/// `<file-path>#<slug>`. The last line carries no trailing newline.
pub fn render_outline(tokens: &[HeadingToken], file_path: &str) -> String {
    let mut output = String::new();

    for (i, token) in tokens.iter().enumerate() {
        let bullet = bullet_for_level(token.level);
        let display = normalize_heading(&token.raw_text);
        let indent = "  ".repeat(token.level as usize);

        output.push_str(&indent);
        output.push_str(&format!(
            "{} [{}]({}#{})",
            bullet,
            display,
            encode_uri(file_path),
            token.slug
        ));

        if i + 1 != tokens.len() {
            output.push('\n');
        }
    }

    output
}
