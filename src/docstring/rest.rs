// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use super::{
    block, description, join_description, DocParam, DocStyle, Docstring, Line,
    LineKind
};

const PARAMETER_FIELDS: [&str; 6] =
    ["param", "parameter", "arg", "argument", "key", "keyword"];

/// reStructuredText field lists: `:param name:`, `:param type name:` and
/// `:type name:`.
pub struct Rest<'src> {
    pos: usize,
    lines: &'src [Line<'src>],
    doc: Docstring
}

impl<'src> Rest<'src> {
    fn field(&mut self) {
        let line = self.lines[self.pos];
        let (rest, next) = block(self.lines, self.pos + 1, line.indent);
        self.pos = next;

        let Some((field, first)) =
            line.text.trim_start_matches(':').split_once(':')
        else {
            return;
        };
        let words = field.split_whitespace().collect::<Vec<_>>();
        match words.as_slice() {
            [keyword, name] if PARAMETER_FIELDS.contains(keyword) => {
                self.doc.params.push(DocParam {
                    name: name.to_string(),
                    type_name: None,
                    description: join_description(first, rest)
                });
            }
            [keyword, type_name @ .., name]
                if PARAMETER_FIELDS.contains(keyword) =>
            {
                self.doc.params.push(DocParam {
                    name: name.to_string(),
                    type_name: Some(type_name.join(" ")),
                    description: join_description(first, rest)
                });
            }
            ["type", name] => {
                let type_name = first.trim();
                if let Some(param) =
                    self.doc.params.iter_mut().find(|param| param.name == *name)
                {
                    param.type_name = Some(type_name.to_string());
                }
            }
            _ => {}
        }
    }
}

impl<'src> DocStyle<'src> for Rest<'src> {
    fn new_parser(lines: &'src [Line<'src>]) -> Self {
        Self {
            pos: 0,
            lines,
            doc: Docstring::default()
        }
    }

    fn parse(mut self) -> Docstring {
        let first_field = self
            .lines
            .iter()
            .position(|line| line.kind == LineKind::Field)
            .unwrap_or(self.lines.len());
        let (short, long) = description(&self.lines[..first_field]);
        self.doc.short_description = short;
        self.doc.long_description = long;

        self.pos = first_field;
        while self.pos < self.lines.len() {
            if self.lines[self.pos].kind == LineKind::Field {
                self.field();
            } else {
                self.pos += 1;
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
    fn parses_param_fields() {
        let doc = parse_as(
            indoc! {"
                Open a connection.

                :param str host: Host to connect to.
                :param port: Port number,
                    defaults to 80.
                :type port: int
                :returns: a connection
            "},
            Style::Rest
        );
        assert_eq!(doc.short_description.as_deref(), Some("Open a connection."));
        assert_eq!(
            doc.params,
            vec![
                DocParam {
                    name: "host".into(),
                    type_name: Some("str".into()),
                    description: "Host to connect to.".into()
                },
                DocParam {
                    name: "port".into(),
                    type_name: Some("int".into()),
                    description: "Port number,\ndefaults to 80.".into()
                }
            ]
        );
    }
}
