//! Canonical field and tool names.
//!
//! Variant declaration order is the canonical output order, so a
//! `BTreeMap` keyed by these enums iterates in canonical order.

use std::fmt;

/// A top-level frontmatter field recognized by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Description,
    Mode,
    Temperature,
    Model,
    Tools,
    Category,
    Tags,
    AllowedDirectories,
}

impl FieldKey {
    /// All fields, in canonical order.
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Name,
        FieldKey::Description,
        FieldKey::Mode,
        FieldKey::Temperature,
        FieldKey::Model,
        FieldKey::Tools,
        FieldKey::Category,
        FieldKey::Tags,
        FieldKey::AllowedDirectories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Description => "description",
            FieldKey::Mode => "mode",
            FieldKey::Temperature => "temperature",
            FieldKey::Model => "model",
            FieldKey::Tools => "tools",
            FieldKey::Category => "category",
            FieldKey::Tags => "tags",
            FieldKey::AllowedDirectories => "allowed_directories",
        }
    }

    /// Look up a field by its exact key. Returns `None` for keys outside the allow-list.
    pub fn from_key(key: &str) -> Option<FieldKey> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool entry recognized inside the `tools` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolName {
    Write,
    Edit,
    Bash,
    Patch,
    Read,
    Grep,
    Glob,
    List,
    Webfetch,
}

impl ToolName {
    /// All tools, in canonical order.
    pub const ALL: [ToolName; 9] = [
        ToolName::Write,
        ToolName::Edit,
        ToolName::Bash,
        ToolName::Patch,
        ToolName::Read,
        ToolName::Grep,
        ToolName::Glob,
        ToolName::List,
        ToolName::Webfetch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::Write => "write",
            ToolName::Edit => "edit",
            ToolName::Bash => "bash",
            ToolName::Patch => "patch",
            ToolName::Read => "read",
            ToolName::Grep => "grep",
            ToolName::Glob => "glob",
            ToolName::List => "list",
            ToolName::Webfetch => "webfetch",
        }
    }

    pub fn from_key(key: &str) -> Option<ToolName> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == key)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
