//! Recording surface and scripted prompt for exercising the list view.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use super::content::ListContent;
use super::surface::{ListSurface, UserPrompt};
use crate::articles::ArticleError;

/// Surface that keeps every rendered content in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    renders: Mutex<Vec<ListContent>>,
}

impl RecordingSurface {
    /// Returns every content rendered so far.
    #[must_use]
    pub fn renders(&self) -> Vec<ListContent> {
        self.renders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the content currently on display.
    #[must_use]
    pub fn current(&self) -> Option<ListContent> {
        self.renders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ListSurface for RecordingSurface {
    fn render(&self, content: &ListContent) -> Result<(), ArticleError> {
        self.renders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(content.clone());
        Ok(())
    }
}

/// Prompt that answers confirmations from a script and records notices.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Creates a prompt that gives the listed answers in order, then declines.
    #[must_use]
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Returns every confirmation question asked so far.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns every notice shown so far.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
