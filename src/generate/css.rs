// src/generate/css.rs

//! Minimal CSS reading: enough to find the class selectors of a CSS module.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssSyntaxError {
    #[error("unterminated comment starting at byte {0}")]
    UnterminatedComment(usize),

    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),

    #[error("unexpected '}}' at byte {0}")]
    UnexpectedClose(usize),

    #[error("{0} unclosed block(s) at end of input")]
    UnclosedBlock(usize),
}

static CLASS_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)").expect("class selector regex is valid")
});

/// Collect the class names used in rule selectors.
///
/// Only the text in front of a `{` counts, so declaration values such as
/// `url(icon.png)` or `.5em` are never mistaken for classes. At-rule
/// preludes (`@media ...`) are skipped; their nested rules are not.
pub fn extract_class_names(source: &str) -> Result<BTreeSet<String>, CssSyntaxError> {
    let source = strip_comments(source)?;
    let mut names = BTreeSet::new();
    for prelude in rule_preludes(&source)? {
        let prelude = prelude.trim();
        if prelude.starts_with('@') {
            continue;
        }
        for cap in CLASS_SELECTOR.captures_iter(&blank_quoted(prelude)) {
            names.insert(cap[1].to_string());
        }
    }
    Ok(names)
}

/// Replace quoted spans (`[href$=".pdf"]`) with spaces so their contents
/// are never read as selectors. Preludes come from [`rule_preludes`], so
/// every quote is already known to be terminated.
fn blank_quoted(prelude: &str) -> String {
    let mut out = String::with_capacity(prelude.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in prelude.chars() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                out.push(' ');
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out
}

fn strip_comments(source: &str) -> Result<String, CssSyntaxError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    let mut offset = 0;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("*/")
            .ok_or(CssSyntaxError::UnterminatedComment(offset + start))?;
        // Keep a separator so `a/**/b` does not glue tokens together.
        out.push(' ');
        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    Ok(out)
}

fn rule_preludes(source: &str) -> Result<Vec<&str>, CssSyntaxError> {
    let mut preludes = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut quote: Option<(char, usize)> = None;
    let mut escaped = false;

    for (i, c) in source.char_indices() {
        if let Some((q, _)) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some((c, i)),
            '{' => {
                preludes.push(&source[start..i]);
                depth += 1;
                start = i + 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(CssSyntaxError::UnexpectedClose(i));
                }
                depth -= 1;
                start = i + 1;
            }
            ';' => start = i + 1,
            _ => {}
        }
    }

    if let Some((_, at)) = quote {
        return Err(CssSyntaxError::UnterminatedString(at));
    }
    if depth != 0 {
        return Err(CssSyntaxError::UnclosedBlock(depth));
    }
    Ok(preludes)
}

/// `my-button_primary` → `myButtonPrimary`, `HTMLTitle` → `htmlTitle`.
pub fn to_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if !prev.is_uppercase() || next_is_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::with_capacity(name.len());
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Render the declaration for a set of exported names.
///
/// Names are emitted in sorted order so identical input always produces
/// identical output.
pub fn render_declaration<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: BTreeSet<&str> = names.into_iter().collect();
    let mut out = String::from("declare const styles: {\n");
    for name in names {
        out.push_str(&format!("  readonly {:?}: string;\n", name));
    }
    out.push_str("};\nexport default styles;\n");
    out
}
