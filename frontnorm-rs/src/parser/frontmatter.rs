//! Frontmatter splitting and field scanning.

use crate::parser::tools::{parse_tools, ToolBlock};
use crate::schema::FieldKey;
use std::collections::BTreeMap;

/// Frontmatter delimiter.
pub const DELIMITER: &str = "---";

/// A document split on its first two delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// Text before the opening delimiter.
    pub before: &'a str,
    /// The raw frontmatter between the first two delimiters.
    pub frontmatter: &'a str,
    /// Everything after the closing delimiter, untouched.
    pub body: &'a str,
}

/// Split content into at most three parts on the first two `---` occurrences.
///
/// Returns `None` when fewer than two delimiters are present. Later
/// delimiters stay inside `body`.
pub fn split_delimited(content: &str) -> Option<FrontmatterSplit<'_>> {
    let mut parts = content.splitn(3, DELIMITER);
    let before = parts.next()?;
    let frontmatter = parts.next()?;
    let body = parts.next()?;

    Some(FrontmatterSplit {
        before,
        frontmatter,
        body,
    })
}

/// The value of a frontmatter field, one entry per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    lines: Vec<String>,
}

impl FieldValue {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Start a value from the text after `key:`. An empty initial value
    /// contributes no line.
    fn from_inline(value: &str) -> Self {
        let mut lines = Vec::new();
        if !value.is_empty() {
            lines.push(value.to_string());
        }
        Self { lines }
    }

    fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// The committed value: lines joined with newlines.
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A field as it appears in the source, before allow-list filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub key: String,
    pub value: FieldValue,
}

/// Scan frontmatter text into fields in source order.
///
/// A line opens a new field when it has no leading whitespace and contains
/// `:`. Every other non-blank line is trimmed and appended to the open
/// field, including lines that start with `#`.
pub fn scan_fields(frontmatter: &str) -> Vec<RawField> {
    let mut fields = Vec::new();
    let mut current: Option<RawField> = None;

    for line in frontmatter.trim().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some((key, value)) = field_start(line) {
            if let Some(done) = current.take() {
                fields.push(done);
            }
            current = Some(RawField {
                key: key.to_string(),
                value: FieldValue::from_inline(value),
            });
        } else if let Some(field) = current.as_mut() {
            field.value.push(trimmed);
        }
        // Continuation lines before the first field are discarded.
    }

    fields.extend(current);
    fields
}

fn field_start(line: &str) -> Option<(&str, &str)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Frontmatter after allow-list filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFrontmatter {
    /// Recognized fields, iterated in canonical order.
    pub fields: BTreeMap<FieldKey, FieldValue>,
    /// Parsed `tools` sub-block, present iff `fields` has `tools`.
    pub tools: Option<ToolBlock>,
    /// Keys outside the allow-list, in first-seen order.
    pub dropped_fields: Vec<String>,
}

impl ParsedFrontmatter {
    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.fields.get(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tool names dropped from the `tools` block.
    pub fn dropped_tools(&self) -> &[String] {
        self.tools
            .as_ref()
            .map(|tools| tools.dropped.as_slice())
            .unwrap_or_default()
    }
}

/// Parse frontmatter text. Duplicate keys resolve to the last occurrence.
pub fn parse_fields(frontmatter: &str) -> ParsedFrontmatter {
    let mut parsed = ParsedFrontmatter::default();

    for field in scan_fields(frontmatter) {
        match FieldKey::from_key(&field.key) {
            Some(key) => {
                parsed.fields.insert(key, field.value);
            }
            None => {
                if !parsed.dropped_fields.contains(&field.key) {
                    parsed.dropped_fields.push(field.key);
                }
            }
        }
    }

    parsed.tools = parsed.fields.get(&FieldKey::Tools).map(parse_tools);
    parsed
}

/// Split and parse a whole document. Returns `None` when the document has
/// no delimited frontmatter.
pub fn parse_frontmatter(content: &str) -> Option<ParsedFrontmatter> {
    split_delimited(content).map(|split| parse_fields(split.frontmatter))
}
