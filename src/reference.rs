//! The bundled reference document of example queries.
//!
//! Only the subset of markdown the document uses is recognised: `#` to `####`
//! headings, `- ` bullets and backtick code spans. Everything else is a plain
//! paragraph line.

/// Example queries, grouped by category.
pub const REFERENCE_DOCUMENT: &str = include_str!("../assets/reference_queries.md");

/// Kind of a document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading level 1 to 4.
    Heading(u8),
    Bullet,
    Paragraph,
    Blank,
}

/// Inline run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Code(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLine<'a> {
    pub kind: BlockKind,
    pub segments: Vec<Segment<'a>>,
}

/// Split `document` into classified lines.
#[must_use]
pub fn parse(document: &str) -> Vec<ReferenceLine<'_>> {
    document.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> ReferenceLine<'_> {
    let trimmed = line.trim_end();
    if trimmed.trim().is_empty() {
        return ReferenceLine {
            kind: BlockKind::Blank,
            segments: Vec::new(),
        };
    }

    if let Some((level, text)) = heading(trimmed) {
        return ReferenceLine {
            kind: BlockKind::Heading(level),
            segments: split_code_spans(text),
        };
    }

    let indented = trimmed.trim_start();
    if let Some(text) = indented
        .strip_prefix("- ")
        .or_else(|| indented.strip_prefix("* "))
    {
        return ReferenceLine {
            kind: BlockKind::Bullet,
            segments: split_code_spans(text.trim()),
        };
    }

    ReferenceLine {
        kind: BlockKind::Paragraph,
        segments: split_code_spans(indented),
    }
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    if !(1..=4).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.strip_prefix(' ')?;
    u8::try_from(hashes).ok().map(|level| (level, text.trim()))
}

/// Split on backticks; an unmatched trailing backtick is kept as text.
fn split_code_spans(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('`') else {
            break;
        };
        if open > 0 {
            segments.push(Segment::Text(&rest[..open]));
        }
        segments.push(Segment::Code(&after[..close]));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_headings_by_level() {
        let lines = parse("# Title\n## Section\n#### Detail\n##### too deep");
        assert_eq!(lines[0].kind, BlockKind::Heading(1));
        assert_eq!(lines[0].segments, vec![Segment::Text("Title")]);
        assert_eq!(lines[1].kind, BlockKind::Heading(2));
        assert_eq!(lines[2].kind, BlockKind::Heading(4));
        assert_eq!(lines[3].kind, BlockKind::Paragraph);
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(parse("#hashtag")[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn bullets_strip_their_marker() {
        let line = &parse("- \"How do I fix JBoss Tools installation errors?\"")[0];
        assert_eq!(line.kind, BlockKind::Bullet);
        assert_eq!(
            line.segments,
            vec![Segment::Text("\"How do I fix JBoss Tools installation errors?\"")]
        );
    }

    #[test]
    fn code_spans_are_split_out() {
        assert_eq!(
            split_code_spans("use `-Xmx` and `gc` flags"),
            vec![
                Segment::Text("use "),
                Segment::Code("-Xmx"),
                Segment::Text(" and "),
                Segment::Code("gc"),
                Segment::Text(" flags"),
            ]
        );
        assert_eq!(
            split_code_spans("dangling ` tick"),
            vec![Segment::Text("dangling ` tick")]
        );
    }

    #[test]
    fn bundled_document_starts_with_a_title() {
        let lines = parse(REFERENCE_DOCUMENT);
        assert_eq!(lines[0].kind, BlockKind::Heading(1));
        assert!(lines.iter().any(|line| line.kind == BlockKind::Bullet));
        assert!(
            lines
                .iter()
                .filter(|line| matches!(line.kind, BlockKind::Heading(2)))
                .count()
                > 1
        );
    }
}
