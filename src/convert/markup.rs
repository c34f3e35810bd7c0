//! Simple HTML fragments to compact newline-delimited text
//!
//! Only a small set of tags is recognized: `br`, the list containers `ul`
//! and `ol`, list items `li`, and the wrappers `p`, `span` and `div`.
//!
//! - `br` becomes a newline.
//! - Each `li` inside a `ul` becomes a `* ` line, inside an `ol` a `1. `
//!   line. Ordered items are not renumbered.
//! - Every other recognized tag is dropped without adding text; nested
//!   structure is not reinterpreted.
//! - Unrecognized tags and stray `<` characters pass through as text.
//!
//! Runs of blank lines collapse to one newline and the result is trimmed.

/// A lexical piece of the input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Tag { name: TagName, closing: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagName {
    Br,
    Ul,
    Ol,
    Li,
    P,
    Span,
    Div,
}

impl TagName {
    fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "br" => Some(TagName::Br),
            "ul" => Some(TagName::Ul),
            "ol" => Some(TagName::Ol),
            "li" => Some(TagName::Li),
            "p" => Some(TagName::P),
            "span" => Some(TagName::Span),
            "div" => Some(TagName::Div),
            _ => None,
        }
    }
}

/// Recognize `<name ...>`, `</name>` or `<name/>` starting at the given `<`.
/// Returns the tag and the number of bytes it spans.
fn scan_tag(input: &str) -> Option<(TagName, bool, usize)> {
    let end = input.find('>')?;
    let inner = &input[1..end];
    // A tag never spans lines or nests; `<p<br>>` is text around a `br`
    if inner.contains(['\n', '\r', '<']) {
        return None;
    }
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let name_len = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    let rest = &inner[name_len..];
    // `<li>`, `<li class="x">` and `<br/>` are tags; `<list>` or `<li<` are not
    if !(rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '/')) {
        return None;
    }
    let name = TagName::parse(&inner[..name_len])?;
    Some((name, closing, end + 1))
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('<') {
        let at = pos + offset;
        match scan_tag(&input[at..]) {
            Some((name, closing, len)) => {
                if at > text_start {
                    tokens.push(Token::Text(&input[text_start..at]));
                }
                tokens.push(Token::Tag { name, closing });
                pos = at + len;
                text_start = pos;
            }
            None => pos = at + 1,
        }
    }
    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn marker(self) -> &'static str {
        match self {
            ListKind::Unordered => "* ",
            ListKind::Ordered => "1. ",
        }
    }
}

/// Output buffers: the document plus one buffer per open list item
struct Renderer {
    lists: Vec<ListKind>,
    items: Vec<(ListKind, String)>,
    out: String,
}

impl Renderer {
    fn new() -> Self {
        Self {
            lists: Vec::new(),
            items: Vec::new(),
            out: String::new(),
        }
    }

    fn current(&mut self) -> &mut String {
        match self.items.last_mut() {
            Some((_, buf)) => buf,
            None => &mut self.out,
        }
    }

    /// Whether text at this point sits directly in a list container
    fn between_items(&self) -> bool {
        let list_depth = self.lists.len();
        let item_depth = self.items.len();
        list_depth > item_depth
    }

    fn text(&mut self, text: &str) {
        // Whitespace between `</li>` and `<li>` is layout, not content
        if self.between_items() && text.trim().is_empty() {
            return;
        }
        self.current().push_str(text);
    }

    fn close_item(&mut self) {
        if let Some((kind, buf)) = self.items.pop() {
            let line = format!("\n{}{}", kind.marker(), buf.trim());
            self.current().push_str(&line);
        }
    }

    fn tag(&mut self, name: TagName, closing: bool) {
        match (name, closing) {
            (TagName::Br, _) => self.current().push('\n'),
            (TagName::Ul, false) | (TagName::Ol, false) => {
                let kind = if name == TagName::Ul {
                    ListKind::Unordered
                } else {
                    ListKind::Ordered
                };
                self.current().push('\n');
                self.lists.push(kind);
            }
            (TagName::Ul, true) | (TagName::Ol, true) => {
                if self.lists.is_empty() {
                    return;
                }
                // Close items left open inside this list
                while self.items.len() >= self.lists.len() {
                    self.close_item();
                }
                self.lists.pop();
            }
            (TagName::Li, false) => {
                let Some(&kind) = self.lists.last() else {
                    return;
                };
                if self.items.len() >= self.lists.len() {
                    // `<li>` without `</li>` before the next item
                    self.close_item();
                }
                self.items.push((kind, String::new()));
            }
            (TagName::Li, true) => {
                if !self.lists.is_empty() && self.items.len() == self.lists.len() {
                    self.close_item();
                }
            }
            (TagName::P, _) | (TagName::Span, _) | (TagName::Div, _) => {}
        }
    }

    fn finish(mut self) -> String {
        while !self.items.is_empty() {
            self.close_item();
        }
        self.out
    }
}

/// Replace each newline-whitespace-newline run with a single newline,
/// keeping whatever indentation follows the last newline of the run.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(nl) = rest.find('\n') {
        out.push_str(&rest[..=nl]);
        let after = &rest[nl + 1..];
        let ws_len = after
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(after.len());
        let run = &after[..ws_len];
        rest = match run.rfind('\n') {
            Some(last) => &after[last + 1..],
            None => after,
        };
    }
    out.push_str(rest);
    out
}

/// Normalize a markup fragment into plain text
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut renderer = Renderer::new();
    for token in tokenize(input) {
        match token {
            Token::Text(text) => renderer.text(text),
            Token::Tag { name, closing } => renderer.tag(name, closing),
        }
    }

    collapse_blank_lines(&renderer.finish()).trim().to_string()
}
