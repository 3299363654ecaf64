//! Prompt form that starts a path generation.

use std::fmt;

use log::{debug, info};

use crate::{api::PathApi, hooks::GeneratePath, store::StoreHandle};

pub const FORM_TITLE: &str = "Generar Path de Aprendizaje";
pub const PROMPT_LABEL: &str = "¿Qué quieres aprender?";
pub const PROMPT_PLACEHOLDER: &str = "Ejemplo: Quiero aprender React desde cero...";
pub const SUBMIT_LABEL: &str = "Generar Path";
pub const SUBMITTING_LABEL: &str = "Generando...";

/// Result of [`PromptForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: the prompt is blank or a generation is in flight.
    Blocked,
    /// The request failed; the form shows the error.
    Failed,
    /// The store now holds the generated path.
    Generated,
}

/// Prompt text plus the generation hook it submits to.
#[derive(Debug)]
pub struct PromptForm<A> {
    prompt: String,
    generator: GeneratePath<A>,
}

impl<A: PathApi> PromptForm<A> {
    pub fn new(api: A, store: StoreHandle) -> Self {
        Self {
            prompt: String::new(),
            generator: GeneratePath::new(api, store),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn is_generating(&self) -> bool {
        self.generator.is_generating()
    }

    /// Error of the last generation, shown inline.
    pub fn error(&self) -> Option<String> {
        self.generator.error()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.prompt.trim().is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_generating() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Submits the prompt as typed.
    ///
    /// The generated path reaches the rest of the application through the
    /// store; the response itself is only logged.
    pub async fn submit(&self) -> SubmitOutcome {
        if !self.can_submit() {
            debug!("Prompt submission blocked");
            return SubmitOutcome::Blocked;
        }

        match self.generator.generate_path(&self.prompt).await {
            Some(response) => {
                info!(
                    "Path generado: {} ({} nodes){}",
                    response.path_id,
                    response.nodes.len(),
                    response
                        .message
                        .as_deref()
                        .map(|message| format!(": {message}"))
                        .unwrap_or_default()
                );
                SubmitOutcome::Generated
            }
            None => SubmitOutcome::Failed,
        }
    }
}

impl<A: PathApi> fmt::Display for PromptForm<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {FORM_TITLE}")?;
        writeln!(f)?;
        writeln!(f, "**{PROMPT_LABEL}**")?;
        writeln!(f)?;
        if self.prompt.trim().is_empty() {
            writeln!(f, "> _{PROMPT_PLACEHOLDER}_")?;
        } else {
            for line in self.prompt.lines() {
                writeln!(f, "> {line}")?;
            }
        }

        if let Some(error) = self.error() {
            writeln!(f)?;
            writeln!(f, "**Error:** {error}")?;
        }

        writeln!(f)?;
        writeln!(f, "[ {} ]", self.button_label())
    }
}
