//! Node workspace: header plus instructions, editor and info panes.

use std::{fmt, sync::Mutex};

use super::{
    code_editor::{write_fenced, CodeEditor},
    content::{instruction_source, starter_code},
    info_panel::InfoPanel,
    instructions::{InstructionsPanel, INSTRUCTIONS_TITLE},
};
use crate::{
    api::PathApi,
    display::Completion,
    hooks::{lock, NodeDetail},
    models::Node,
};

pub const LOADING_MESSAGE: &str = "Cargando ejercicio...";
pub const NOT_FOUND_MESSAGE: &str = "No se encontró el ejercicio";
/// Labels of the header actions. They have no behavior yet.
pub const ACTION_LABELS: [&str; 2] = ["Ejecutar Tests", "Guardar Borrador"];

/// Title block of a loaded workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceHeader {
    pub title: String,
    pub subheader: String,
}

impl WorkspaceHeader {
    pub fn for_node(node: &Node) -> Self {
        Self {
            title: node.title.clone(),
            subheader: format!("Ejercicio {} • {}", node.order, Completion(node.completed)),
        }
    }
}

/// Snapshot of the editor pane at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPane {
    pub language: String,
    pub code: String,
}

/// Everything shown once the node is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedWorkspace {
    pub node: Node,
    pub header: WorkspaceHeader,
    pub instructions: InstructionsPanel,
    pub editor: EditorPane,
    pub info: InfoPanel,
}

/// The single state a workspace renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceView {
    Loading,
    Error(String),
    NotFound,
    Loaded(Box<LoadedWorkspace>),
}

/// Workspace for one node of a path.
///
/// Owns the node detail hook and the editor. [`NodeWorkspace::render`]
/// picks, in order, loading, error, not-found and loaded; the editor is
/// reseeded from the node's starter code whenever that code changes.
#[derive(Debug)]
pub struct NodeWorkspace<A> {
    detail: NodeDetail<A>,
    editor: Mutex<CodeEditor>,
}

impl<A: PathApi> NodeWorkspace<A> {
    /// Creates the workspace without fetching.
    pub fn new(api: A, path_id: Option<String>, node_id: Option<String>) -> Self {
        Self {
            detail: NodeDetail::new(api, path_id, node_id),
            editor: Mutex::new(CodeEditor::new(String::new())),
        }
    }

    /// Creates the workspace and fetches its node.
    pub async fn mount(api: A, path_id: Option<String>, node_id: Option<String>) -> Self {
        let workspace = Self::new(api, path_id, node_id);
        workspace.detail.refetch().await;
        workspace
    }

    pub fn detail(&self) -> &NodeDetail<A> {
        &self.detail
    }

    /// Runs `f` with exclusive access to the editor.
    pub fn with_editor<R>(&self, f: impl FnOnce(&mut CodeEditor) -> R) -> R {
        f(&mut lock(&self.editor))
    }

    /// Current editor content.
    pub fn code(&self) -> String {
        lock(&self.editor).value().to_string()
    }

    /// Points the workspace at another node, fetching if it changed.
    pub async fn set_node(&self, path_id: Option<String>, node_id: Option<String>) -> bool {
        self.detail.set_inputs(path_id, node_id).await
    }

    pub fn render(&self) -> WorkspaceView {
        let state = self.detail.state();
        if state.is_loading {
            return WorkspaceView::Loading;
        }
        if let Some(error) = state.error {
            return WorkspaceView::Error(error);
        }
        let Some(node) = state.node else {
            return WorkspaceView::NotFound;
        };

        let mut editor = lock(&self.editor);
        editor.set_initial_code(starter_code(&node));
        WorkspaceView::Loaded(Box::new(LoadedWorkspace {
            header: WorkspaceHeader::for_node(&node),
            instructions: InstructionsPanel::new(INSTRUCTIONS_TITLE, instruction_source(&node)),
            editor: EditorPane {
                language: editor.language().to_string(),
                code: editor.value().to_string(),
            },
            info: InfoPanel,
            node,
        }))
    }
}

impl fmt::Display for WorkspaceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceView::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            WorkspaceView::Error(message) => {
                writeln!(f, "## ⚠️ Error")?;
                writeln!(f)?;
                writeln!(f, "{message}")
            }
            WorkspaceView::NotFound => writeln!(f, "{NOT_FOUND_MESSAGE}"),
            WorkspaceView::Loaded(loaded) => write!(f, "{loaded}"),
        }
    }
}

/// Joins the non-blank lines of `text` with spaces so it fits one heading.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for LoadedWorkspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", single_line(&self.header.title))?;
        writeln!(f)?;
        writeln!(f, "{}", self.header.subheader)?;
        writeln!(f)?;
        let actions: Vec<String> = ACTION_LABELS
            .iter()
            .map(|label| format!("[ {label} ]"))
            .collect();
        writeln!(f, "{}", actions.join(" "))?;

        writeln!(f, "\n---\n")?;
        write!(f, "{}", self.instructions)?;

        writeln!(f, "\n---\n")?;
        writeln!(f, "## Editor ({})", self.editor.language)?;
        writeln!(f)?;
        write_fenced(f, &self.editor.language, &self.editor.code)?;

        writeln!(f, "\n---\n")?;
        write!(f, "{}", self.info)
    }
}
