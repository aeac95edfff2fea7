//! frontnorm - rewrite agent Markdown frontmatter into a canonical form.
//!
//! # Overview
//!
//! Agent definition files start with a `---` delimited frontmatter block.
//! frontnorm rewrites that block so that:
//! - only allow-listed fields remain, in a fixed order
//! - the `tools` block lists allow-listed tools in a fixed order
//! - multi-line values are indented by two spaces
//!
//! The body after the closing delimiter is never touched.
//!
//! # Example
//!
//! ```
//! use frontnorm::normalize;
//!
//! let input = "---\nmode: build\nname: Foo\n---\nBody text\n";
//! assert_eq!(normalize(input), "---\nname: Foo\nmode: build\n---\nBody text\n");
//!
//! // Content without frontmatter is returned as is.
//! assert_eq!(normalize("No frontmatter here"), "No frontmatter here");
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod report;
pub mod schema;
pub mod workspace;

// Re-export main types at crate root
pub use config::Config;
pub use document::{process_file, AgentFile, FileReport, Outcome, WriteMode};
pub use error::{NormalizeError, Result};
pub use normalizer::{normalize, normalize_document, Normalization};
pub use parser::{parse_frontmatter, ParsedFrontmatter};
pub use report::{normalize_workspace, RunReport, RunSummary};
pub use schema::{FieldKey, ToolName};
pub use workspace::Workspace;
