//! Prompt and location rendering.
//!
//! The shell dresses the tree up as a PowerShell drive: the root is
//! `C:\Terminal` and each path segment becomes a `\`-separated directory.

use folio_tree::Path;

/// Display name of the tree root.
pub const DRIVE_ROOT: &str = "C:\\Terminal";

/// `C:\Terminal` followed by the path's segments.
pub fn format_location(path: &Path) -> String {
    if path.is_empty() {
        DRIVE_ROOT.to_string()
    } else {
        format!("{}\\{}", DRIVE_ROOT, path.join_with("\\"))
    }
}

/// The prompt shown before each command, e.g. `PS C:\Terminal\resume>`.
pub fn format_prompt(path: &Path) -> String {
    format!("PS {}>", format_location(path))
}
