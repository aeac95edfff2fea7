//! Canonical rewriting of agent frontmatter.

use crate::parser::{parse_fields, split_delimited, FieldValue, ParsedFrontmatter, ToolBlock, DELIMITER};
use crate::schema::FieldKey;

/// Line emitted under `tools:` when no tool entry survives.
pub const TOOLS_PLACEHOLDER: &str = "  # Tools configuration";

/// Result of normalizing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    /// The rewritten document, or the input unchanged when it has no frontmatter.
    pub content: String,
    /// The parse the rewrite was built from, `None` for a no-op.
    pub frontmatter: Option<ParsedFrontmatter>,
}

impl Normalization {
    pub fn has_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }
}

/// Rewrite the frontmatter of `content` into canonical order.
///
/// Content without two `---` delimiters is returned unchanged. Fields and
/// tools outside the allow-lists are dropped. The body after the second
/// delimiter is kept byte for byte; text before the first delimiter is not
/// part of the output.
pub fn normalize(content: &str) -> String {
    normalize_document(content).content
}

/// Like [`normalize`], also returning the parsed frontmatter.
pub fn normalize_document(content: &str) -> Normalization {
    let Some(split) = split_delimited(content) else {
        return Normalization {
            content: content.to_string(),
            frontmatter: None,
        };
    };

    let parsed = parse_fields(split.frontmatter);
    let rendered = render(&parsed);

    Normalization {
        content: format!("{DELIMITER}\n{rendered}\n{DELIMITER}{}", split.body),
        frontmatter: Some(parsed),
    }
}

/// Render parsed frontmatter as canonical lines joined with `\n`, without delimiters.
pub fn render(parsed: &ParsedFrontmatter) -> String {
    let mut lines = Vec::new();

    for (key, value) in &parsed.fields {
        match (key, parsed.tools.as_ref()) {
            (FieldKey::Tools, Some(tools)) => render_tools(tools, &mut lines),
            _ => render_field(*key, value, &mut lines),
        }
    }

    lines.join("\n")
}

fn render_tools(tools: &ToolBlock, lines: &mut Vec<String>) {
    lines.push(format!("{}:", FieldKey::Tools));

    if tools.is_empty() {
        lines.push(TOOLS_PLACEHOLDER.to_string());
        return;
    }

    for (tool, setting) in &tools.entries {
        lines.push(format!("  {tool}: {setting}"));
    }
}

fn render_field(key: FieldKey, value: &FieldValue, lines: &mut Vec<String>) {
    if !value.is_multiline() {
        let single = value.lines().first().map(String::as_str).unwrap_or("");
        lines.push(format!("{key}: {single}"));
        return;
    }

    lines.push(format!("{key}:"));
    lines.extend(
        value
            .lines()
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("  {line}")),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reorders_fields() {
        let input = "---\nmode: build\nname: Foo\n---\nBody text\n";
        assert_eq!(normalize(input), "---\nname: Foo\nmode: build\n---\nBody text\n");
    }

    #[test]
    fn test_reorders_tools() {
        let input = "---\nname: a\ntools:\n  bash: true\n  write: true\n---\n";
        assert_eq!(
            normalize(input),
            "---\nname: a\ntools:\n  write: true\n  bash: true\n---\n"
        );
    }

    #[test]
    fn test_no_frontmatter_unchanged() {
        assert_eq!(normalize("No frontmatter here"), "No frontmatter here");
        let result = normalize_document("one --- delimiter");
        assert!(!result.has_frontmatter());
        assert_eq!(result.content, "one --- delimiter");
    }

    #[test]
    fn test_empty_tools_placeholder() {
        let input = "---\nname: a\ntools:\nmode: all\n---\nbody";
        assert_eq!(
            normalize(input),
            "---\nname: a\nmode: all\ntools:\n  # Tools configuration\n---\nbody"
        );
    }

    #[test]
    fn test_unknown_tools_only_gives_placeholder() {
        let input = "---\ntools:\n  todowrite: true\n---\n";
        assert_eq!(normalize(input), "---\ntools:\n  # Tools configuration\n---\n");
    }

    #[test]
    fn test_placeholder_is_stable() {
        let once = normalize("---\ntools:\n---\n");
        assert_eq!(once, "---\ntools:\n  # Tools configuration\n---\n");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_hash_continuation_line_is_kept() {
        let content = "---\nname: a\ndescription:\n  #1 reviewer\n  checks code\n---\nbody";
        assert_eq!(normalize(content), content);
    }

    #[test]
    fn test_hash_key_line_closes_open_field() {
        assert_eq!(
            normalize("---\ntags:\n  - a\n# note: x\n  - b\n---\n"),
            "---\ntags: - a\n---\n"
        );
    }

    #[test]
    fn test_drops_unknown_fields() {
        let input = "---\nowner: platform\nname: Foo\nprimary_objective: ship\n---\n";
        let result = normalize_document(input);
        assert_eq!(result.content, "---\nname: Foo\n---\n");
        assert_eq!(
            result.frontmatter.unwrap().dropped_fields,
            vec!["owner".to_string(), "primary_objective".to_string()]
        );
    }

    #[test]
    fn test_full_canonical_order() {
        let input = "---\n\
allowed_directories:\n  - src\n\
tags:\n  - review\n\
category: quality\n\
tools:\n  read: true\n\
model: sonnet\n\
temperature: 0.1\n\
mode: subagent\n\
description: Reviews code\n\
name: reviewer\n\
---\n# Reviewer\n";
        let expected = "---\n\
name: reviewer\n\
description: Reviews code\n\
mode: subagent\n\
temperature: 0.1\n\
model: sonnet\n\
tools:\n  read: true\n\
category: quality\n\
tags: - review\n\
allowed_directories: - src\n\
---\n# Reviewer\n";
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_multiline_field_indented() {
        let input = "---\ndescription: Line one\n    line two\n---\n";
        assert_eq!(normalize(input), "---\ndescription:\n  Line one\n  line two\n---\n");
    }

    #[test]
    fn test_empty_value_keeps_key() {
        assert_eq!(normalize("---\nmodel:\n---\n"), "---\nmodel: \n---\n");
    }

    #[test]
    fn test_body_with_extra_delimiters_preserved() {
        let input = "---\nname: x\n---\nbody\n---\nmore---text\n";
        assert_eq!(normalize(input), "---\nname: x\n---\nbody\n---\nmore---text\n");
    }

    #[test]
    fn test_text_before_delimiter_not_kept() {
        assert_eq!(normalize("intro---name: x\n---body"), "---\nname: x\n---body");
    }

    #[test]
    fn test_no_recognized_fields_gives_empty_block() {
        assert_eq!(normalize("---\nfoo: bar\n---\nbody"), "---\n\n---\nbody");
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        let input = "---\nname: a\ndescription: b\ntools:\n  write: true\n  edit: false\ntags:\n  - x\n  - y\n---\n\nBody\n";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_crlf_body_preserved() {
        let input = "---\r\nmode: build\r\nname: Foo\r\n---\r\nBody\r\n";
        assert_eq!(normalize(input), "---\nname: Foo\nmode: build\n---\r\nBody\r\n");
    }
}
