// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use super::{
    block, description, DocParam, DocStyle, Docstring, Line, LineKind
};

const PARAMETER_SECTIONS: [&str; 6] = [
    "Parameters",
    "Params",
    "Arguments",
    "Args",
    "Other Parameters",
    "Keyword Arguments"
];

/// numpydoc layout: section titles underlined with dashes, entries written
/// as `name : type` with the description indented beneath.
pub struct Numpy<'src> {
    pos: usize,
    lines: &'src [Line<'src>],
    doc: Docstring
}

impl<'src> Numpy<'src> {
    fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn is_section_start(&self, i: usize) -> bool {
        i + 1 < self.lines.len()
            && self.lines[i].kind != LineKind::Blank
            && self.lines[i].kind != LineKind::Underline
            && self.lines[i + 1].kind == LineKind::Underline
    }

    fn skip_section(&mut self) {
        while !self.is_eof() && !self.is_section_start(self.pos) {
            self.pos += 1;
        }
    }

    fn parameters(&mut self, indent: usize) {
        while !self.is_eof() && !self.is_section_start(self.pos) {
            let line = self.lines[self.pos];
            if line.kind == LineKind::Blank || line.indent > indent {
                self.pos += 1;
                continue;
            }
            let (names, type_name) = match line.text.split_once(':') {
                Some((names, type_name)) => {
                    let type_name = type_name.trim();
                    (names, (!type_name.is_empty()).then(|| type_name))
                }
                None => (line.text, None)
            };
            let (text, next) = block(self.lines, self.pos + 1, line.indent);
            // `x1, x2 : int` documents both parameters at once
            for name in names.split(',').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                self.doc.params.push(DocParam {
                    name: name.to_string(),
                    type_name: type_name.map(str::to_string),
                    description: text.clone()
                });
            }
            self.pos = next;
        }
    }
}

impl<'src> DocStyle<'src> for Numpy<'src> {
    fn new_parser(lines: &'src [Line<'src>]) -> Self {
        Self {
            pos: 0,
            lines,
            doc: Docstring::default()
        }
    }

    fn parse(mut self) -> Docstring {
        let first_section = (0..self.lines.len())
            .find(|&i| self.is_section_start(i))
            .unwrap_or(self.lines.len());
        let (short, long) = description(&self.lines[..first_section]);
        self.doc.short_description = short;
        self.doc.long_description = long;

        self.pos = first_section;
        while !self.is_eof() {
            let title = self.lines[self.pos];
            self.pos += 2;
            if PARAMETER_SECTIONS.contains(&title.text) {
                self.parameters(title.indent);
            } else {
                self.skip_section();
            }
        }
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::docstring::{parse_as, DocParam, Style};

    #[test]
    fn parses_parameters_section() {
        let doc = parse_as(indoc! {"
            The Foo class does many very useful things.

            Parameters
            ----------
            var1 : str
                var1 description.
            var2
                var2 description,
                over two lines.
            a, b : int
                Shared.

            Returns
            -------
            None
        "}, Style::Numpy);
        assert_eq!(
            doc.short_description.as_deref(),
            Some("The Foo class does many very useful things.")
        );
        assert_eq!(doc.long_description, None);
        assert_eq!(
            doc.params,
            vec![
                DocParam {
                    name: "var1".into(),
                    type_name: Some("str".into()),
                    description: "var1 description.".into()
                },
                DocParam {
                    name: "var2".into(),
                    type_name: None,
                    description: "var2 description,\nover two lines.".into()
                },
                DocParam {
                    name: "a".into(),
                    type_name: Some("int".into()),
                    description: "Shared.".into()
                },
                DocParam {
                    name: "b".into(),
                    type_name: Some("int".into()),
                    description: "Shared.".into()
                }
            ]
        );
    }

    #[test]
    fn ignores_other_sections() {
        let doc = parse_as(indoc! {"
            Summary.

            Notes
            -----
            x
                not a parameter
        "}, Style::Numpy);
        assert!(doc.params.is_empty());
        assert_eq!(doc.short_description.as_deref(), Some("Summary."));
    }
}
