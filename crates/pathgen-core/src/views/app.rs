//! Top-level page: title above the prompt form.

use std::fmt;

use super::prompt_form::PromptForm;
use crate::{api::PathApi, store::StoreHandle};

pub const APP_TITLE: &str = "Learning Path Generator";

#[derive(Debug)]
pub struct AppShell<A> {
    form: PromptForm<A>,
}

impl<A: PathApi> AppShell<A> {
    pub fn new(api: A, store: StoreHandle) -> Self {
        Self {
            form: PromptForm::new(api, store),
        }
    }

    pub fn title(&self) -> &'static str {
        APP_TITLE
    }

    pub fn form(&self) -> &PromptForm<A> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PromptForm<A> {
        &mut self.form
    }
}

impl<A: PathApi> fmt::Display for AppShell<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {APP_TITLE}")?;
        writeln!(f)?;
        write!(f, "{}", self.form)
    }
}
