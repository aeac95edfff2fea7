//! Parsing of the `tools` sub-block.

use crate::parser::frontmatter::FieldValue;
use crate::schema::ToolName;
use std::collections::BTreeMap;

/// Tool entries of a `tools` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolBlock {
    /// Recognized tools, iterated in canonical order.
    pub entries: BTreeMap<ToolName, String>,
    /// Tool names outside the allow-list, in first-seen order.
    pub dropped: Vec<String>,
}

impl ToolBlock {
    pub fn get(&self, tool: ToolName) -> Option<&str> {
        self.entries.get(&tool).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `name: value` lines of a `tools` value.
///
/// Lines without `:` are ignored. Only the first `:` splits, so values may
/// contain colons. A repeated tool keeps its last value.
pub fn parse_tools(value: &FieldValue) -> ToolBlock {
    let mut block = ToolBlock::default();

    for line in value.lines() {
        let Some((name, setting)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();

        match ToolName::from_key(name) {
            Some(tool) => {
                block.entries.insert(tool, setting.trim().to_string());
            }
            None => {
                if !block.dropped.iter().any(|d| d == name) {
                    block.dropped.push(name.to_string());
                }
            }
        }
    }

    block
}
