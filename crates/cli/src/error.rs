// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Engine failures are rendered as:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use cw_engine::{EngineError, InvalidTransition};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CwError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CwError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Describe an engine error for the terminal
    pub fn explain(err: &EngineError) -> Self {
        match err {
            EngineError::NotFound { kind: "instance", id } => {
                CwError::new(format!("Chore instance '{}' not found", id))
                    .with_context("Ids may be shortened to any unique prefix")
                    .with_suggestion("List instances: cw list")
            }
            EngineError::NotFound { kind, id } => {
                CwError::new(format!("{} '{}' not found", capitalize(kind), id))
                    .with_context("The chore may have been deleted")
                    .with_suggestion("List chores: cw chore list")
            }
            EngineError::InvalidState { instance, reason } => match reason {
                InvalidTransition::AlreadyCompleted => {
                    CwError::new(format!("Instance '{}' is already completed", instance))
                        .with_suggestion(format!("Undo the completion: cw undo {}", instance))
                }
                InvalidTransition::NotCompleted => {
                    CwError::new(format!("Instance '{}' is not completed", instance))
                        .with_suggestion(format!("Complete it: cw done {}", instance))
                }
                InvalidTransition::BlockedByPending => {
                    CwError::new(format!("Instance '{}' cannot be reopened", instance))
                        .with_context("Another occurrence of this chore is already pending")
                        .with_suggestion("Complete or undo the pending occurrence first")
                }
            },
            EngineError::ConfigurationGap { chore } => {
                CwError::new(format!("Nobody can be assigned '{}'", chore))
                    .with_context("The chore has no rotation members and no default member")
                    .with_suggestion("Add members: --rotate ann,bob")
                    .with_suggestion("Or assign one member: --member ann")
            }
            EngineError::PendingExists { definition, instance } => CwError::new(format!(
                "Chore '{}' already has a pending instance",
                definition
            ))
            .with_suggestion(format!("Complete it: cw done {}", instance)),
            other => CwError::new(other.to_string()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for CwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CwError {}
