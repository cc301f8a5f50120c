//! Parsing of the oracle's textual list responses
//!
//! The oracle is asked to reply with a bracketed list of quoted URLs such as
//! `['https://a.test/x', 'https://a.test/y']`. Replies may wrap the list in prose or a
//! code fence, use either quote style, and spread entries over several lines. The
//! grammar accepted here:
//!
//! ```text
//! list  := '[' ws ( item ( ws ',' ws item )* ws ','? )? ws ']'
//! item  := '\'' chars '\'' | '"' chars '"'      (backslash escapes the next char)
//! ```
//!
//! Replies often carry other brackets in their prose, so every `[` is tried in turn and
//! the first balanced span that matches the grammar wins.

/// Parses a bracketed list of quoted strings out of free text
///
/// Returns None when no list matching the grammar can be found.
///
/// # Examples
///
/// ```
/// use sumi_gather::relevance::parse_url_list;
///
/// let parsed = parse_url_list("Here you go: ['https://a.test/x', \"https://a.test/y\"]");
/// assert_eq!(parsed.unwrap(), vec!["https://a.test/x", "https://a.test/y"]);
/// assert!(parse_url_list("I could not find anything relevant.").is_none());
/// ```
pub fn parse_url_list(text: &str) -> Option<Vec<String>> {
    text.char_indices()
        .filter(|&(_, c)| c == '[')
        .filter_map(|(start, _)| matching_bracket(text, start).map(|end| &text[start..=end]))
        .find_map(parse_bracketed)
}

/// Parses one `[...]` span, as JSON first and then as a list literal
fn parse_bracketed(list: &str) -> Option<Vec<String>> {
    if let Ok(items) = serde_json::from_str::<Vec<String>>(list) {
        return Some(items);
    }

    parse_literal_list(&list[1..list.len() - 1])
}

/// Byte offset of the `]` closing the `[` at `start`
///
/// Brackets inside quoted text do not count. An unterminated quote or bracket yields None.
fn matching_bracket(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if let Some(q) = quote {
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
            '\'' | '"' => quote = Some(c),
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses the inside of a Python-style list literal of strings
fn parse_literal_list(inner: &str) -> Option<Vec<String>> {
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(_) => return None,
        };

        let mut item = String::new();
        loop {
            match chars.next()? {
                '\\' => item.push(chars.next()?),
                c if c == quote => break,
                c => item.push(c),
            }
        }
        items.push(item);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }

    Some(items)
}
