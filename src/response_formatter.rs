//! # Response Formatter
//!
//! Turns decoded bridge responses into stable, human-readable reports.
//! Formatting never changes decoded values: lists keep bridge order (except
//! find-usages, which groups by file) and counts are printed as received.

use crate::errors::BridgeError;
use crate::types::*;

/// Changes shown before the "... and N more" line
pub const MAX_CHANGES_SHOWN: usize = 10;
/// Usages shown in a blocked safe-delete report
pub const MAX_USAGES_SHOWN: usize = 15;
/// Context lines longer than this are cut
pub const MAX_CONTEXT_CHARS: usize = 80;
const CONTEXT_KEEP_CHARS: usize = 77;

const WRITE_MARKER: &str = "📝";
const READ_MARKER: &str = "👁️";

pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Uniform rendering of a connectivity or application failure
    pub fn format_error(err: &BridgeError) -> String {
        format!(
            "Error: {}\n{}",
            err.message,
            err.details.as_deref().unwrap_or("")
        )
    }

    pub fn format_health(response: &HealthResponse) -> String {
        format!(
            "PyCharm bridge is {} (version {}), {} project(s) open.",
            response.status, response.version, response.projects_open
        )
    }

    pub fn format_projects(response: &ProjectListResponse) -> String {
        if response.projects.is_empty() {
            return "No projects are currently open in PyCharm.".to_string();
        }

        let mut lines = vec!["Open projects in PyCharm:".to_string(), String::new()];
        for project in &response.projects {
            let marker = if project.is_default { " (default)" } else { "" };
            lines.push(format!("  • {}{marker}", project.name));
            lines.push(format!("    Path: {}", project.path));
            lines.push(String::new());
        }
        lines.join("\n")
    }

    pub fn format_rename(response: &RenameResponse, new_name: &str, preview: bool) -> String {
        let mut lines = vec![
            if preview {
                format!("Preview: Renaming to '{new_name}' would affect:")
            } else {
                format!("Successfully renamed to '{new_name}':")
            },
            String::new(),
            format!("  Files modified: {}", response.files_modified),
            format!("  Usages updated: {}", response.usages_updated),
        ];
        push_changes(&mut lines, &response.changes);
        lines.join("\n")
    }

    pub fn format_move(response: &MoveResponse, target_file: &str, preview: bool) -> String {
        let mut lines = vec![
            if preview {
                format!("Preview: Moving to '{target_file}' would affect:")
            } else {
                format!("Successfully moved to '{target_file}':")
            },
            String::new(),
            format!("  Files modified: {}", response.files_modified),
            format!("  Imports updated: {}", response.imports_updated),
        ];
        push_changes(&mut lines, &response.changes);
        lines.join("\n")
    }

    pub fn format_extract_method(
        response: &ExtractMethodResponse,
        method_name: &str,
        preview: bool,
    ) -> String {
        let mut lines = vec![
            if preview {
                format!("Preview: Would extract method '{method_name}':")
            } else {
                format!("Successfully extracted method '{method_name}':")
            },
            String::new(),
            format!("  File: {}", response.file),
            format!("  Method line: {}", response.method_line),
        ];

        if response.parameters.is_empty() {
            lines.push("  Parameters: none".to_string());
        } else {
            lines.push(format!("  Parameters: {}", response.parameters.join(", ")));
        }

        if let Some(return_type) = response.return_type.as_deref().filter(|t| !t.is_empty()) {
            lines.push(format!("  Return type: {return_type}"));
        }

        lines.join("\n")
    }

    pub fn format_extract_variable(
        response: &ExtractVariableResponse,
        variable_name: &str,
        preview: bool,
    ) -> String {
        let lines = [
            if preview {
                format!("Preview: Would extract variable '{variable_name}':")
            } else {
                format!("Successfully extracted variable '{variable_name}':")
            },
            String::new(),
            format!("  File: {}", response.file),
            format!("  Variable line: {}", response.variable_line),
            format!("  Occurrences replaced: {}", response.occurrences_replaced),
        ];
        lines.join("\n")
    }

    pub fn format_inline(response: &InlineResponse, preview: bool) -> String {
        let mut lines = vec![
            if preview {
                "Preview: Inlining would affect:".to_string()
            } else {
                "Successfully inlined:".to_string()
            },
            String::new(),
            format!("  Usages inlined: {}", response.usages_inlined),
        ];
        push_changes(&mut lines, &response.changes);
        lines.join("\n")
    }

    pub fn format_change_signature(response: &ChangeSignatureResponse, preview: bool) -> String {
        let mut lines = vec![
            if preview {
                "Preview: Signature change would affect:".to_string()
            } else {
                "Successfully changed signature:".to_string()
            },
            String::new(),
            format!("  Call sites updated: {}", response.call_sites_updated),
        ];
        push_changes(&mut lines, &response.changes);
        lines.join("\n")
    }

    /// A deleted element gets a single sentence; a blocked delete lists the
    /// usages that prevented it.
    pub fn format_safe_delete(response: &SafeDeleteResponse) -> String {
        if response.deleted {
            return "Successfully deleted element (no usages found).".to_string();
        }

        let mut lines = vec![
            format!("Cannot delete: {} usage(s) found:", response.usages_found),
            String::new(),
        ];

        if let Some(usages) = &response.usages {
            for usage in usages.iter().take(MAX_USAGES_SHOWN) {
                push_usage(&mut lines, usage, "  ");
                lines.push(String::new());
            }
            if usages.len() > MAX_USAGES_SHOWN {
                lines.push(format!(
                    "  ... and {} more",
                    usages.len() - MAX_USAGES_SHOWN
                ));
            }
        }

        lines.push(String::new());
        lines.push("Remove or update these usages before deleting.".to_string());
        lines.join("\n")
    }

    /// Usages grouped by file in first-seen order, ascending line within a file
    pub fn format_find_usages(response: &FindUsagesResponse) -> String {
        let mut lines = vec![
            format!(
                "Usages of '{}': {} found",
                response.symbol, response.total_count
            ),
            String::new(),
        ];

        for (file, mut usages) in group_by_file(&response.usages) {
            usages.sort_by_key(|usage| usage.line);
            lines.push(format!("📄 {file}:"));
            for usage in usages {
                push_usage(&mut lines, usage, "  ");
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn push_changes(lines: &mut Vec<String>, changes: &[FileChange]) {
    if changes.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("Changes:".to_string());
    for change in changes.iter().take(MAX_CHANGES_SHOWN) {
        lines.push(format!("  • {}:{}", change.file, change.line));
        lines.push(format!("    {} → {}", change.old_text, change.new_text));
    }

    if changes.len() > MAX_CHANGES_SHOWN {
        lines.push(format!(
            "  ... and {} more",
            changes.len() - MAX_CHANGES_SHOWN
        ));
    }
}

fn push_usage(lines: &mut Vec<String>, usage: &UsageInfo, indent: &str) {
    let marker = if usage.is_write_access {
        WRITE_MARKER
    } else {
        READ_MARKER
    };
    lines.push(format!(
        "{indent}{marker} {}:{}:{}",
        usage.file, usage.line, usage.column
    ));
    lines.push(format!("{indent}   {}", context_line(&usage.text)));
}

/// First line of a usage snippet, trimmed and cut to a readable width
pub fn context_line(text: &str) -> String {
    let first = text.lines().next().unwrap_or("").trim();
    if first.chars().count() > MAX_CONTEXT_CHARS {
        let kept: String = first.chars().take(CONTEXT_KEEP_CHARS).collect();
        format!("{kept}...")
    } else {
        first.to_string()
    }
}

fn group_by_file(usages: &[UsageInfo]) -> Vec<(&str, Vec<&UsageInfo>)> {
    let mut groups: Vec<(&str, Vec<&UsageInfo>)> = Vec::new();
    for usage in usages {
        match groups.iter_mut().find(|(file, _)| *file == usage.file) {
            Some((_, entries)) => entries.push(usage),
            None => groups.push((usage.file.as_str(), vec![usage])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_line_takes_first_line_only() {
        assert_eq!(context_line("  foo(x)\n  bar(y)"), "foo(x)");
        assert_eq!(context_line(""), "");
    }

    #[test]
    fn test_context_line_truncation_boundary() {
        let exact = "a".repeat(80);
        assert_eq!(context_line(&exact), exact);

        let long = "b".repeat(81);
        let cut = context_line(&long);
        assert_eq!(cut, format!("{}...", "b".repeat(77)));
        assert_eq!(cut.chars().count(), 80);
    }

    #[test]
    fn test_context_line_counts_characters_not_bytes() {
        let long = "é".repeat(90);
        assert_eq!(context_line(&long), format!("{}...", "é".repeat(77)));
    }
}
