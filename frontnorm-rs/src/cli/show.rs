//! `show` command: print one file's normalized content.

use crate::cli::args::ShowArgs;
use crate::cli::output::Output;
use crate::document::{AgentFile, FileReport};
use crate::error::{NormalizeError, Result};
use crate::workspace::Workspace;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ShowResponse {
    #[serde(flatten)]
    pub report: FileReport,
    pub content: String,
}

pub fn show(workspace: &Workspace, args: &ShowArgs, output: &Output) -> Result<()> {
    let full_path = workspace.resolve_file(&args.path)?;
    let content = std::fs::read_to_string(&full_path).map_err(|source| NormalizeError::Read {
        path: full_path.clone(),
        source,
    })?;

    let response = render(&args.path, content);

    if output.is_structured() {
        output.print(&response)?;
    } else {
        output.print_verbatim(&response.content);
    }
    Ok(())
}

/// Normalize `content` in memory. Files without frontmatter come back unchanged.
pub fn render(path: &Path, content: String) -> ShowResponse {
    let file = AgentFile::new(path, content);
    let (report, normalized) = file.normalize();
    ShowResponse {
        report,
        content: normalized.unwrap_or(file.content),
    }
}
