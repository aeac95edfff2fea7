//! Parsers for agent frontmatter.

pub mod frontmatter;
pub mod tools;

pub use frontmatter::{
    parse_fields, parse_frontmatter, scan_fields, split_delimited, FieldValue,
    FrontmatterSplit, ParsedFrontmatter, RawField, DELIMITER,
};
pub use tools::{parse_tools, ToolBlock};
