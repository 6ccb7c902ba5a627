// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use super::{
    block, description, join_description, DocParam, DocStyle, Docstring, Line,
    LineKind
};

const SECTIONS: [&str; 22] = [
    "Args",
    "Arguments",
    "Parameters",
    "Params",
    "Keyword Args",
    "Keyword Arguments",
    "Other Parameters",
    "Attributes",
    "Returns",
    "Return",
    "Yields",
    "Yield",
    "Raises",
    "Example",
    "Examples",
    "Note",
    "Notes",
    "Todo",
    "Warning",
    "Warnings",
    "See Also",
    "References"
];

const PARAMETER_SECTIONS: [&str; 7] = [
    "Args",
    "Arguments",
    "Parameters",
    "Params",
    "Keyword Args",
    "Keyword Arguments",
    "Other Parameters"
];

/// Google layout: `Args:` headers followed by indented
/// `name (type): description` entries.
pub struct Google<'src> {
    pos: usize,
    lines: &'src [Line<'src>],
    doc: Docstring
}

fn section_title<'src>(line: &Line<'src>) -> Option<&'src str> {
    if line.kind != LineKind::Header {
        return None;
    }
    let title = line.text.trim_end_matches(':').trim_end();
    SECTIONS.contains(&title).then_some(title)
}

impl<'src> Google<'src> {
    fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn in_section(&self, indent: usize) -> bool {
        let line = &self.lines[self.pos];
        line.kind == LineKind::Blank || line.indent > indent
    }

    fn skip_section(&mut self, indent: usize) {
        while !self.is_eof() && self.in_section(indent) {
            self.pos += 1;
        }
    }

    fn parameters(&mut self, indent: usize) {
        while !self.is_eof() && self.in_section(indent) {
            let line = self.lines[self.pos];
            if line.kind == LineKind::Blank {
                self.pos += 1;
                continue;
            }
            let Some((head, first)) = line.text.split_once(':') else {
                self.pos += 1;
                continue;
            };
            let (name, type_name) = match head.split_once('(') {
                Some((name, type_name)) => (
                    name.trim(),
                    Some(type_name.trim_end_matches(')').trim().to_string())
                ),
                None => (head.trim(), None)
            };
            let (rest, next) = block(self.lines, self.pos + 1, line.indent);
            self.doc.params.push(DocParam {
                name: name.to_string(),
                type_name,
                description: join_description(first, rest)
            });
            self.pos = next;
        }
    }
}

impl<'src> DocStyle<'src> for Google<'src> {
    fn new_parser(lines: &'src [Line<'src>]) -> Self {
        Self {
            pos: 0,
            lines,
            doc: Docstring::default()
        }
    }

    fn parse(mut self) -> Docstring {
        let first_section = self
            .lines
            .iter()
            .position(|line| section_title(line).is_some())
            .unwrap_or(self.lines.len());
        let (short, long) = description(&self.lines[..first_section]);
        self.doc.short_description = short;
        self.doc.long_description = long;

        self.pos = first_section;
        while !self.is_eof() {
            let header = self.lines[self.pos];
            self.pos += 1;
            match section_title(&header) {
                Some(title) if PARAMETER_SECTIONS.contains(&title) => {
                    self.parameters(header.indent)
                }
                _ => self.skip_section(header.indent)
            }
        }
        self.doc
    }
}
