// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! Splits a constructor's docstring into a description and a per-parameter
//! table. Three layouts are understood: numpydoc, Google and reST field
//! lists.

use logos::Logos;

pub mod google;
pub mod numpy;
pub mod rest;

pub use google::Google;
pub use numpy::Numpy;
pub use rest::Rest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    pub type_name: Option<String>,
    pub description: String
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Docstring {
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub params: Vec<DocParam>
}

impl Docstring {
    /// The short and long descriptions joined by a newline.
    pub fn description(&self) -> String {
        let mut description =
            self.short_description.clone().unwrap_or_default();
        if let Some(long) = &self.long_description {
            description.push('\n');
            description.push_str(long);
        }
        description.trim().to_string()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.description.as_str())
    }
}

/// Per-line lexical classes.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum DocToken {
    #[regex(r"-{3,}")]
    Underline,

    #[regex(r":[A-Za-z][^:\n]*:")]
    Field,

    #[regex(r"[A-Za-z][A-Za-z ]*:")]
    Header
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    Blank,
    /// A run of dashes underlining a section title.
    Underline,
    /// A field list entry such as `:param name:`.
    Field,
    /// A line consisting only of a title followed by a colon.
    Header,
    Text
}

#[derive(Debug, Clone, Copy)]
pub struct Line<'src> {
    pub indent: usize,
    /// The line with the docstring's margin removed, indentation included.
    pub raw: &'src str,
    /// The line with surrounding whitespace removed.
    pub text: &'src str,
    pub kind: LineKind
}

fn classify(text: &str) -> LineKind {
    if text.is_empty() {
        return LineKind::Blank;
    }
    let mut lexer = DocToken::lexer(text);
    let token = lexer.next();
    let whole_line = lexer.span().end == text.len();
    match token {
        Some(Ok(DocToken::Underline)) if whole_line => LineKind::Underline,
        Some(Ok(DocToken::Header)) if whole_line => LineKind::Header,
        Some(Ok(DocToken::Field)) => LineKind::Field,
        _ => LineKind::Text
    }
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Normalizes a docstring: tabs become spaces, the common indentation of
/// every line after the first is removed, and blank lines are dropped from
/// both ends.
pub fn clean(doc: &str) -> String {
    let expanded = doc.replace('\t', "        ");
    let lines = expanded.lines().collect::<Vec<_>>();
    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);

    let mut cleaned = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            cleaned.push(line.trim());
        } else if line.trim().is_empty() {
            cleaned.push("");
        } else {
            cleaned.push(line[margin..].trim_end());
        }
    }
    while cleaned.first().is_some_and(|line| line.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|line| line.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}

/// Splits an already cleaned docstring into classified lines.
pub fn lex(cleaned: &str) -> Vec<Line<'_>> {
    cleaned
        .lines()
        .map(|raw| {
            let text = raw.trim();
            Line {
                indent: indent_of(raw),
                raw,
                text,
                kind: classify(text)
            }
        })
        .collect()
}

/// Short and long description from the lines preceding the first section.
pub(crate) fn description(
    lines: &[Line<'_>]
) -> (Option<String>, Option<String>) {
    let text = lines
        .iter()
        .map(|line| line.raw)
        .collect::<Vec<_>>()
        .join("\n");
    let text = text.trim();
    if text.is_empty() {
        return (None, None);
    }
    match text.split_once('\n') {
        Some((short, long)) => {
            let long = long.trim();
            (
                Some(short.trim().to_string()),
                (!long.is_empty()).then(|| long.to_string())
            )
        }
        None => (Some(text.to_string()), None)
    }
}

/// Collects the lines after `start` that are indented past `indent`, plus
/// interleaved blank lines, and returns their dedented text together with
/// the index of the first line not consumed.
pub(crate) fn block(
    lines: &[Line<'_>], start: usize, indent: usize
) -> (String, usize) {
    let mut end = start;
    while end < lines.len()
        && (lines[end].kind == LineKind::Blank || lines[end].indent > indent)
    {
        end += 1;
    }
    let body = &lines[start..end];
    let margin = body
        .iter()
        .filter(|line| line.kind != LineKind::Blank)
        .map(|line| line.indent)
        .min()
        .unwrap_or(0);
    let text = body
        .iter()
        .map(|line| {
            if line.kind == LineKind::Blank {
                ""
            } else {
                &line.raw[margin..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    (text.trim().to_string(), end)
}

/// Joins the text following an entry's name with its continuation block.
pub(crate) fn join_description(first: &str, rest: String) -> String {
    match (first.trim(), rest.is_empty()) {
        ("", _) => rest,
        (first, true) => first.to_string(),
        (first, false) => format!("{}\n{}", first, rest)
    }
}

pub trait DocStyle<'src>
where
    Self: Sized {
    fn new_parser(lines: &'src [Line<'src>]) -> Self;

    fn parse(self) -> Docstring;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Numpy,
    Google,
    Rest
}

impl Style {
    /// Detection order; earlier layouts win ties.
    pub const ALL: [Style; 3] = [Style::Numpy, Style::Google, Style::Rest];

    fn parse(self, lines: &[Line<'_>]) -> Docstring {
        match self {
            Style::Numpy => Numpy::new_parser(lines).parse(),
            Style::Google => Google::new_parser(lines).parse(),
            Style::Rest => Rest::new_parser(lines).parse()
        }
    }
}

/// Parses `doc` assuming the given layout.
pub fn parse_as(doc: &str, style: Style) -> Docstring {
    let cleaned = clean(doc);
    let lines = lex(&cleaned);
    style.parse(&lines)
}

/// Parses `doc` with every known layout and keeps the result that found the
/// most parameters.
pub fn parse(doc: &str) -> Docstring {
    let cleaned = clean(doc);
    let lines = lex(&cleaned);
    let mut best: Option<Docstring> = None;
    for style in Style::ALL {
        let candidate = style.parse(&lines);
        if best.as_ref().map_or(true, |current| {
            candidate.params.len() > current.params.len()
        }) {
            best = Some(candidate);
        }
    }
    best.unwrap_or_default()
}
