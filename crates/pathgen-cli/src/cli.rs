//! Subcommand arguments and the handlers that run them.
//!
//! Argument structs carry the clap attributes and convert into the core
//! request types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Requests → Hooks / Views → Renderer
//! ```
//!
//! Every handler owns one store for the lifetime of the command, the same
//! way a page owns one store in the browser.

use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::info;
use pathgen_core::{
    hooks::{NodeOperations, PathLoader},
    models::{GeneratePathRequest, NodeCompletionRequest},
    views::{AppShell, NodeWorkspace, SubmitOutcome, WorkspaceView},
    ApiClient, OperationStatus, PathOverview, StoreHandle,
};

use crate::renderer::TerminalRenderer;

/// Generate a learning path
///
/// All words are joined with single spaces into the prompt. A prompt made of
/// whitespace only is rejected without contacting the backend.
#[derive(Args)]
pub struct GenerateArgs {
    /// What you want to learn, e.g. `pathgen generate learn Go`
    #[arg(required = true, num_args = 1.., value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

impl From<GenerateArgs> for GeneratePathRequest {
    fn from(val: GenerateArgs) -> Self {
        GeneratePathRequest {
            prompt: val.prompt.join(" "),
        }
    }
}

/// Show a path with its exercises and progress
#[derive(Args)]
pub struct ShowPathArgs {
    /// Identifier of the path
    pub path_id: String,
}

#[derive(Subcommand)]
pub enum PathCommands {
    /// Show a path overview
    Show(ShowPathArgs),
}

/// Identifies one exercise of a path
#[derive(Args)]
pub struct NodeRef {
    /// Identifier of the path
    pub path_id: String,
    /// Identifier of the exercise within the path
    pub node_id: String,
}

/// Show the workspace of an exercise
#[derive(Args)]
pub struct ShowNodeArgs {
    #[command(flatten)]
    pub node: NodeRef,
    /// Print the statement as a standalone HTML document instead
    #[arg(long)]
    pub html: bool,
}

/// Print the starter code of an exercise
///
/// The code is written exactly as the editor holds it, with no trailing
/// newline added.
#[derive(Args)]
pub struct NodeCodeArgs {
    #[command(flatten)]
    pub node: NodeRef,
    /// Write the code to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Mark an exercise as completed
#[derive(Args)]
pub struct CompleteNodeArgs {
    #[command(flatten)]
    pub node: NodeRef,
    /// Mark the exercise as in progress again
    #[arg(long)]
    pub undo: bool,
}

impl From<&CompleteNodeArgs> for NodeCompletionRequest {
    fn from(val: &CompleteNodeArgs) -> Self {
        NodeCompletionRequest {
            completed: !val.undo,
        }
    }
}

#[derive(Subcommand)]
pub enum NodeCommands {
    /// Show the exercise workspace
    Show(ShowNodeArgs),
    /// Print the exercise's starter code
    Code(NodeCodeArgs),
    /// Mark the exercise as completed (or in progress with --undo)
    Complete(CompleteNodeArgs),
}

/// Runs commands against the backend and renders their views.
pub struct Cli {
    client: ApiClient,
    store: StoreHandle,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: ApiClient, renderer: TerminalRenderer) -> Self {
        Self {
            client,
            store: StoreHandle::new(),
            renderer,
        }
    }

    /// Prints the app shell with an empty prompt form.
    pub fn show_shell(&self) -> Result<()> {
        let shell = AppShell::new(self.client.clone(), self.store.clone());
        self.renderer.render(&shell.to_string())
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let request = GeneratePathRequest::from(args);
        let mut shell = AppShell::new(self.client.clone(), self.store.clone());
        shell.form_mut().set_prompt(request.prompt);

        match shell.form().submit().await {
            SubmitOutcome::Generated => {
                let snapshot = self.store.snapshot();
                self.renderer.render(&PathOverview(&snapshot).to_string())
            }
            SubmitOutcome::Failed => {
                self.renderer.render(&shell.to_string())?;
                let error = shell.form().error().unwrap_or_default();
                bail!("{error}")
            }
            SubmitOutcome::Blocked => {
                self.renderer.render(&shell.to_string())?;
                bail!("El prompt no puede estar vacío")
            }
        }
    }

    pub async fn handle_path_command(&self, command: PathCommands) -> Result<()> {
        match command {
            PathCommands::Show(args) => self.show_path(&args.path_id).await,
        }
    }

    pub async fn handle_node_command(&self, command: NodeCommands) -> Result<()> {
        match command {
            NodeCommands::Show(args) => self.show_node(args).await,
            NodeCommands::Code(args) => self.node_code(args).await,
            NodeCommands::Complete(args) => self.complete_node(args).await,
        }
    }

    async fn show_path(&self, path_id: &str) -> Result<()> {
        let loader = PathLoader::new(self.client.clone(), self.store.clone());
        match loader.fetch_path(path_id).await {
            Some(path) => self.renderer.render(&path.to_string()),
            None => self.fail(loader.error()),
        }
    }

    async fn open_workspace(&self, node: NodeRef) -> NodeWorkspace<ApiClient> {
        NodeWorkspace::mount(self.client.clone(), Some(node.path_id), Some(node.node_id)).await
    }

    async fn show_node(&self, args: ShowNodeArgs) -> Result<()> {
        let workspace = self.open_workspace(args.node).await;
        match workspace.render() {
            WorkspaceView::Loaded(loaded) if args.html => {
                write_raw(&loaded.instructions.to_html())
            }
            view @ WorkspaceView::Loaded(_) => self.renderer.render(&view.to_string()),
            view => self.fail_with_view(&view),
        }
    }

    async fn node_code(&self, args: NodeCodeArgs) -> Result<()> {
        let workspace = self.open_workspace(args.node).await;
        let view = workspace.render();
        if !matches!(view, WorkspaceView::Loaded(_)) {
            return self.fail_with_view(&view);
        }

        let code = workspace.code();
        match args.output {
            Some(path) => {
                std::fs::write(&path, &code)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {} bytes to {}", code.len(), path.display());
                let status =
                    OperationStatus::success(format!("Código guardado en {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => write_raw(&code),
        }
    }

    async fn complete_node(&self, args: CompleteNodeArgs) -> Result<()> {
        let request = NodeCompletionRequest::from(&args);
        let NodeRef { path_id, node_id } = args.node;

        let loader = PathLoader::new(self.client.clone(), self.store.clone());
        if loader.fetch_path(&path_id).await.is_none() {
            return self.fail(loader.error());
        }
        self.store.set_current_node(node_id.as_str());

        let nodes = NodeOperations::new(self.client.clone(), self.store.clone());
        if !nodes
            .update_node_completion(&node_id, request.completed)
            .await
        {
            return self.fail(nodes.error());
        }

        let message = if request.completed {
            format!("Ejercicio {node_id} completado")
        } else {
            format!("Ejercicio {node_id} marcado en progreso")
        };
        let snapshot = self.store.snapshot();
        self.renderer.render(&format!(
            "{}\n{}",
            OperationStatus::success(message),
            PathOverview(&snapshot)
        ))
    }

    /// Renders a hook error and fails the command with it.
    fn fail(&self, error: Option<String>) -> Result<()> {
        let message = error.unwrap_or_else(|| "Error desconocido".to_string());
        self.renderer
            .render(&OperationStatus::failure(message.as_str()).to_string())?;
        bail!("{message}")
    }

    fn fail_with_view(&self, view: &WorkspaceView) -> Result<()> {
        self.renderer.render(&view.to_string())?;
        match view {
            WorkspaceView::Error(message) => bail!("{message}"),
            _ => bail!("{}", view.to_string().trim_end()),
        }
    }
}

/// Writes text to stdout exactly as given.
fn write_raw(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
