//! Code editor pane state.

use std::fmt;

use log::debug;

use super::content::EDITOR_LANGUAGE;

/// Callback invoked with the new content after every user edit.
pub type ChangeCallback = Box<dyn FnMut(&str) + Send>;

/// Editable source buffer seeded from an initial value.
///
/// The buffer equals `initial_code` right after creation and again every
/// time a different `initial_code` is supplied. Edits in between are kept
/// until that happens.
///
/// # Examples
///
/// ```rust
/// use pathgen_core::views::CodeEditor;
///
/// let mut editor = CodeEditor::new("package main\n");
/// editor.edit("package main\n\nfunc main() {}\n");
/// assert!(editor.is_modified());
///
/// // Same initial code: the edit survives.
/// assert!(!editor.set_initial_code("package main\n"));
/// assert!(editor.is_modified());
///
/// // New initial code: the buffer follows it.
/// assert!(editor.set_initial_code("package other\n"));
/// assert_eq!(editor.value(), "package other\n");
/// ```
pub struct CodeEditor {
    initial_code: String,
    code: String,
    language: String,
    on_change: Option<ChangeCallback>,
}

impl CodeEditor {
    /// Creates an editor for Go source holding `initial_code`.
    pub fn new(initial_code: impl Into<String>) -> Self {
        let initial_code = initial_code.into();
        Self {
            code: initial_code.clone(),
            initial_code,
            language: EDITOR_LANGUAGE.to_string(),
            on_change: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn initial_code(&self) -> &str {
        &self.initial_code
    }

    /// Current buffer content.
    pub fn value(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// True when the buffer differs from the initial code.
    pub fn is_modified(&self) -> bool {
        self.code != self.initial_code
    }

    /// Supplies the initial code again.
    ///
    /// A value different from the current one replaces the buffer. Returns
    /// whether that happened.
    pub fn set_initial_code(&mut self, initial_code: impl Into<String>) -> bool {
        let initial_code = initial_code.into();
        if initial_code == self.initial_code {
            return false;
        }
        debug!("Editor reset to new initial code ({} bytes)", initial_code.len());
        self.code.clone_from(&initial_code);
        self.initial_code = initial_code;
        true
    }

    /// Applies a user edit and notifies the change callback.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.code = value.into();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.code);
        }
    }
}

impl fmt::Debug for CodeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeEditor")
            .field("initial_code", &self.initial_code)
            .field("code", &self.code)
            .field("language", &self.language)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Writes `code` as a fenced markdown block.
///
/// The fence is one backtick longer than the longest backtick run in the
/// code, and at least three long, so the block cannot be closed early.
pub(crate) fn write_fenced(f: &mut fmt::Formatter<'_>, language: &str, code: &str) -> fmt::Result {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat((longest_run + 1).max(3));

    writeln!(f, "{fence}{language}")?;
    f.write_str(code)?;
    if !code.is_empty() && !code.ends_with('\n') {
        writeln!(f)?;
    }
    writeln!(f, "{fence}")
}

impl fmt::Display for CodeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fenced(f, &self.language, &self.code)
    }
}
