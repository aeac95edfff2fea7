//! Property tests for frontmatter normalization.

use frontnorm::{normalize, FieldKey, ToolName};
use proptest::prelude::*;

const UNKNOWN_FIELDS: &[&str] = &["owner", "stability", "primary_objective", "permission"];
const UNKNOWN_TOOLS: &[&str] = &["todowrite", "task", "mcp"];

fn field_name() -> impl Strategy<Value = String> {
    let known: Vec<String> = FieldKey::ALL.iter().map(|k| k.as_str().to_string()).collect();
    let unknown: Vec<String> = UNKNOWN_FIELDS.iter().map(|k| k.to_string()).collect();
    prop_oneof![
        3 => prop::sample::select(known),
        1 => prop::sample::select(unknown),
    ]
}

fn tool_name() -> impl Strategy<Value = String> {
    let known: Vec<String> = ToolName::ALL.iter().map(|t| t.as_str().to_string()).collect();
    let unknown: Vec<String> = UNKNOWN_TOOLS.iter().map(|t| t.to_string()).collect();
    prop_oneof![
        3 => prop::sample::select(known),
        1 => prop::sample::select(unknown),
    ]
}

/// Lines of one frontmatter field, including continuation lines.
fn field_lines() -> impl Strategy<Value = Vec<String>> {
    let inline = "([a-z0-9][a-z0-9 .:]{0,12})?";
    let continuation = "(- )?[a-z0-9][a-z0-9 ]{0,8}";
    let tool_entry = (tool_name(), "(true|false|ask|[a-z]{1,5})");

    prop_oneof![
        (field_name(), inline, prop::collection::vec(continuation, 0..3)).prop_map(
            |(key, value, rest)| {
                let mut lines = vec![format!("{key}: {value}")];
                lines.extend(rest.into_iter().map(|l| format!("  {l}")));
                lines
            }
        ),
        prop::collection::vec(tool_entry, 0..5).prop_map(|entries| {
            let mut lines = vec!["tools:".to_string()];
            lines.extend(entries.into_iter().map(|(tool, value)| format!("  {tool}: {value}")));
            lines
        }),
    ]
}

fn document() -> impl Strategy<Value = (String, String)> {
    let body = "[a-zA-Z0-9 #\n-]{0,40}";
    (prop::collection::vec(field_lines(), 0..8), body).prop_map(|(fields, body)| {
        let lines: Vec<String> = fields.into_iter().flatten().collect();
        (format!("---\n{}\n---{}", lines.join("\n"), body), body)
    })
}

fn frontmatter_of(content: &str) -> &str {
    content.splitn(3, "---").nth(1).unwrap()
}

fn body_of(content: &str) -> &str {
    content.splitn(3, "---").nth(2).unwrap()
}

proptest! {
    #[test]
    fn normalize_is_idempotent((doc, _) in document()) {
        let once = normalize(&doc);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn body_is_preserved((doc, body) in document()) {
        let out = normalize(&doc);
        prop_assert_eq!(body_of(&out), body.as_str());
    }

    #[test]
    fn fields_are_allow_listed_and_ordered((doc, _) in document()) {
        let out = normalize(&doc);
        let keys: Vec<FieldKey> = frontmatter_of(&out)
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(' '))
            .map(|line| {
                let key = line.split_once(':').map(|(k, _)| k).unwrap_or(line);
                FieldKey::from_key(key).expect("only allow-listed keys are emitted")
            })
            .collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "keys out of order: {:?}", keys);
    }

    #[test]
    fn tools_are_allow_listed_and_ordered((doc, _) in document()) {
        let out = normalize(&doc);
        let mut in_tools = false;
        let mut tools = Vec::new();
        for line in frontmatter_of(&out).lines() {
            if !line.starts_with(' ') {
                in_tools = line == "tools:";
                continue;
            }
            if in_tools && line != "  # Tools configuration" {
                let name = line.trim().split_once(':').map(|(n, _)| n).unwrap_or("");
                tools.push(ToolName::from_key(name).expect("only allow-listed tools are emitted"));
            }
        }
        prop_assert!(tools.windows(2).all(|pair| pair[0] < pair[1]), "tools out of order: {:?}", tools);
    }

    #[test]
    fn unknown_fields_are_dropped((doc, _) in document()) {
        let out = normalize(&doc);
        for unknown in UNKNOWN_FIELDS {
            let prefix = format!("{unknown}:");
            prop_assert!(!frontmatter_of(&out).lines().any(|l| l.starts_with(&prefix)));
        }
    }

    #[test]
    fn without_two_delimiters_is_noop(head in "[a-z :\n]{0,40}", tail in "[a-z :\n]{0,40}", delimited in any::<bool>()) {
        let content = if delimited { format!("{head}---{tail}") } else { head };
        prop_assert_eq!(normalize(&content), content);
    }
}
