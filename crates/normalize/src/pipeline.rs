use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;

/// Main entry point. Takes raw document text and a config and returns the
/// canonical comparable form.
///
/// The transformations run in a fixed order: optional NFKC, comment
/// removal, assignment-target removal, line-break flattening, punctuation
/// removal, lowercasing. The output may legitimately be empty (a
/// comment-only file normalizes to nothing); that is not an error.
pub fn normalize(input: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    cfg.validate()?;

    // NFKC first, since it can change character boundaries. Cow avoids the
    // allocation when the pass is disabled.
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    // Line-oriented passes. Rejoining with '\n' keeps the line structure
    // intact for the flattening step below; a line's trailing '\r' (from
    // CRLF input) survives here and becomes a space later.
    let mut lines = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            lines.push('\n');
        }
        lines.push_str(strip_line(line, cfg));
    }

    let mut out = String::with_capacity(lines.len());
    for ch in lines.chars() {
        match ch {
            '\n' | '\r' => out.push(' '),
            '\'' => {}
            c if cfg.strip_punctuation && c.is_ascii_punctuation() => {}
            c if cfg.lowercase => out.extend(c.to_lowercase()),
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Per-line heuristics: drop the comment suffix, then drop the assignment
/// target prefix. The assignment marker itself is kept; the punctuation pass
/// removes it later.
fn strip_line<'a>(line: &'a str, cfg: &NormalizeConfig) -> &'a str {
    let line = if cfg.strip_comments {
        match line.find(cfg.comment_marker) {
            Some(pos) => &line[..pos],
            None => line,
        }
    } else {
        line
    };

    if cfg.strip_assignment_targets {
        match line.find(cfg.assignment_marker) {
            Some(pos) => &line[pos..],
            None => line,
        }
    } else {
        line
    }
}
