//! Core value types shared across all Beacon frontends.

use std::fmt;

/// Identity of the editor and plugin reporting activity.
///
/// Rendered into the opaque `plugin` string attached to every heartbeat,
/// in the `"{editor}/{editor_version} {plugin}/{plugin_version}"` form the
/// telemetry backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInfo {
    pub editor_name: String,
    pub editor_version: String,
    pub plugin_name: String,
    pub plugin_version: String,
}

impl EditorInfo {
    pub fn new(
        editor_name: impl Into<String>,
        editor_version: impl Into<String>,
        plugin_name: impl Into<String>,
        plugin_version: impl Into<String>,
    ) -> Self {
        Self {
            editor_name: editor_name.into(),
            editor_version: editor_version.into(),
            plugin_name: plugin_name.into(),
            plugin_version: plugin_version.into(),
        }
    }

    /// The identity string attached to heartbeats.
    pub fn identity(&self) -> String {
        format!(
            "{}/{} {}/{}",
            self.editor_name, self.editor_version, self.plugin_name, self.plugin_version
        )
    }
}

/// A single reported activity event, frozen at the moment the tracker
/// accepted it.
///
/// Each heartbeat is an immutable snapshot: the project context and identity
/// string are resolved at construction time and never aliased to tracker
/// state. A record is consumed exactly once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heartbeat {
    /// File being reported (path or URI, opaque to the core).
    pub file: String,
    /// True when triggered by an explicit save; false for focus/open/edit.
    pub is_write: bool,
    /// Opaque editor+plugin identity, see [`EditorInfo::identity`].
    pub plugin: String,
    /// Project name at construction time; `None` when no workspace has been
    /// reported yet.
    pub project: Option<String>,
}

impl fmt::Display for Heartbeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (write={}, project={})",
            self.file,
            self.is_write,
            self.project.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_string_matches_expected_form() {
        let info = EditorInfo::new("monodevelop", "8.1", "beacon-monodevelop", "0.1.0");
        assert_eq!(info.identity(), "monodevelop/8.1 beacon-monodevelop/0.1.0");
    }
}
