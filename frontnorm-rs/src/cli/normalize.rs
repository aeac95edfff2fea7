//! `normalize` and `check` commands.

use crate::cli::args::NormalizeArgs;
use crate::cli::output::Output;
use crate::document::{Outcome, WriteMode};
use crate::error::{ExitCode, Result};
use crate::report::{normalize_workspace, RunReport};
use crate::workspace::Workspace;

/// Normalize all matching files, writing changes unless `--dry-run`.
pub fn normalize(workspace: &Workspace, args: &NormalizeArgs, output: &Output) -> Result<ExitCode> {
    let mode = if args.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let report = normalize_workspace(workspace, mode)?;
    print_report(&report, output)?;

    if report.has_errors() {
        Ok(ExitCode::FileErrors)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Dry run that fails when any file needs normalization.
pub fn check(workspace: &Workspace, output: &Output) -> Result<ExitCode> {
    let report = normalize_workspace(workspace, WriteMode::DryRun)?;
    print_report(&report, output)?;

    if report.has_errors() {
        Ok(ExitCode::FileErrors)
    } else if report.has_changes() {
        Ok(ExitCode::NeedsNormalization)
    } else {
        Ok(ExitCode::Success)
    }
}

fn print_report(report: &RunReport, output: &Output) -> Result<()> {
    if output.is_structured() {
        return output.print(report);
    }

    output.detail(&format!("Found {} agent files to process", report.summary.total));
    for line in file_lines(report) {
        output.detail(&line);
    }
    output.print_raw(&summary_text(report));
    Ok(())
}

/// One line per changed or failed file.
pub fn file_lines(report: &RunReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .changed_files()
        .map(|path| {
            format!(
                "✓ {}: {}",
                path.display(),
                Outcome::Normalized.message(report.dry_run)
            )
        })
        .collect();

    lines.extend(
        report
            .errors
            .iter()
            .map(|e| format!("✗ {}: {}", e.path.display(), e.message)),
    );
    lines
}

/// The closing summary block.
pub fn summary_text(report: &RunReport) -> String {
    let summary = &report.summary;
    let changed_label = if report.dry_run {
        "Files that would change"
    } else {
        "Files that were changed"
    };

    let mut text = String::from("\nSummary:\n");
    text.push_str(&format!("- Files normalized: {}\n", summary.normalized));
    text.push_str(&format!("- Files with errors: {}\n", summary.errors));
    text.push_str(&format!("- Files already normalized: {}\n", summary.already_normalized));
    text.push_str(&format!("- Files without frontmatter: {}", summary.no_frontmatter));

    if report.has_changes() {
        text.push_str(&format!("\n\n{}:", changed_label));
        for path in report.changed_files() {
            text.push_str(&format!("\n  - {}", path.display()));
        }
    }

    text
}
