//! Classification of a single line of INI text.

/// What a trimmed line of input represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// `[name]`, with the name already trimmed
    Section(&'a str),
    /// `option = value`; `raw` is the whole trimmed line
    Option {
        key: &'a str,
        value: &'a str,
        raw: &'a str,
    },
    Malformed(&'a str),
}

impl<'a> Line<'a> {
    /// Classify one line. Surrounding whitespace is ignored.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Line::Blank;
        }

        if line.starts_with('#') {
            return Line::Comment;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            return Line::Section(line[1..line.len() - 1].trim());
        }

        match line.find('=') {
            Some(pos) if pos > 0 => Line::Option {
                key: line[..pos].trim(),
                value: line[pos + 1..].trim(),
                raw: line,
            },
            _ => Line::Malformed(line),
        }
    }
}
