//! Views: the page components, rendered as markdown.
//!
//! ```text
//! AppShell
//! └── PromptForm ──▶ GeneratePath ──▶ store
//!
//! NodeWorkspace ──▶ NodeDetail
//! ├── header (title, Ejercicio N • status, actions)
//! ├── InstructionsPanel  (instruction_source)
//! ├── CodeEditor         (starter_code)
//! └── InfoPanel
//! ```
//!
//! Views hold no network code of their own; they drive hooks and format
//! the resulting state.

pub mod app;
pub mod code_editor;
pub mod content;
pub mod info_panel;
pub mod instructions;
pub mod prompt_form;
pub mod workspace;


pub use app::{AppShell, APP_TITLE};
pub use code_editor::{ChangeCallback, CodeEditor};
pub use content::{instruction_source, starter_code, BOILERPLATE_PLACEHOLDER, EDITOR_LANGUAGE};
pub use info_panel::{InfoPanel, InfoSection};
pub use instructions::{markdown_options, InstructionsPanel, INSTRUCTIONS_TITLE};
pub use prompt_form::{PromptForm, SubmitOutcome};
pub use workspace::{
    EditorPane, LoadedWorkspace, NodeWorkspace, WorkspaceHeader, WorkspaceView,
    LOADING_MESSAGE, NOT_FOUND_MESSAGE,
};
