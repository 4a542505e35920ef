// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chore definition commands

use crate::app::Engine;
use crate::output::{self, short_id, ChoreDetail, ChoreRow, DeletedChore, OutputFormat};
use anyhow::Result;
use chrono::NaiveTime;
use clap::{Args, Subcommand};
use cw_core::{Frequency, NewChoreDefinition, RecurrencePattern};

#[derive(Args)]
pub struct ChoreArgs {
    #[command(subcommand)]
    pub command: ChoreCommand,
}

#[derive(Subcommand)]
pub enum ChoreCommand {
    /// Define a chore and schedule its first instance
    Add(AddArgs),
    /// List chores
    List,
    /// Show a chore and its pending instance
    Show {
        /// Chore id or unique prefix
        id: String,
    },
    /// Delete a chore and its pending instance
    Rm {
        /// Chore id or unique prefix
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Chore name
    pub name: String,

    /// Repeat after each completion (implied by any schedule flag)
    #[arg(long)]
    pub recurring: bool,

    /// daily, weekly or monthly
    #[arg(long)]
    pub frequency: Option<Frequency>,

    /// Weekdays for a weekly chore, 0 = Sunday .. 6 = Saturday
    #[arg(long, value_delimiter = ',')]
    pub days: Vec<u8>,

    /// Repeat every N periods
    #[arg(long)]
    pub interval: Option<u32>,

    /// Members taking turns, in order
    #[arg(long = "rotate", value_delimiter = ',', value_name = "MEMBERS")]
    pub rotate: Vec<String>,

    /// Member assigned when nobody rotates
    #[arg(long)]
    pub member: Option<String>,

    /// Time of day the chore is due (HH:MM)
    #[arg(long, value_parser = parse_due_time)]
    pub due_time: Option<NaiveTime>,
}

impl AddArgs {
    pub fn to_definition(&self) -> NewChoreDefinition {
        let mut new = NewChoreDefinition::new(self.name.clone());

        let scheduled = self.frequency.is_some() || !self.days.is_empty() || self.interval.is_some();
        if self.recurring || scheduled {
            // Days only make sense for a weekly chore
            let frequency = self.frequency.unwrap_or(if self.days.is_empty() {
                Frequency::Daily
            } else {
                Frequency::Weekly
            });
            let pattern = RecurrencePattern::new(frequency)
                .on_days(self.days.iter().copied())
                .every(self.interval.unwrap_or(1));
            new = new.recurring(pattern);
        }
        if !self.rotate.is_empty() {
            new = new.rotating(self.rotate.iter().map(String::as_str));
        }
        if let Some(member) = &self.member {
            new = new.assigned_to(member.as_str());
        }
        if let Some(time) = self.due_time {
            new = new.at(time);
        }
        new
    }
}

fn parse_due_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| format!("expected HH:MM, got '{}'", s))
}

pub async fn handle(engine: &Engine, command: ChoreCommand, format: OutputFormat) -> Result<()> {
    match command {
        ChoreCommand::Add(args) => {
            let (definition, instance) = engine.create_definition(args.to_definition()).await?;
            match format {
                OutputFormat::Text => {
                    println!("Added chore {} ({})", definition.name, short_id(&definition.id.0));
                    println!(
                        "First up: {} on {} ({})",
                        instance.assigned_member_id,
                        instance.due_date,
                        short_id(&instance.id.0)
                    );
                }
                OutputFormat::Json => output::print(
                    &ChoreDetail {
                        definition,
                        pending: Some(instance),
                    },
                    format,
                ),
            }
        }
        ChoreCommand::List => {
            let rows: Vec<ChoreRow> = engine.definitions().await.into_iter().map(ChoreRow).collect();
            output::print_list(&rows, ChoreRow::HEADER, "No chores", format);
        }
        ChoreCommand::Show { id } => {
            let definition = engine.definition(&id).await?;
            let pending = engine.pending_instance(&definition.id).await;
            output::print(&ChoreDetail { definition, pending }, format);
        }
        ChoreCommand::Rm { id } => {
            let definition = engine.definition(&id).await?;
            let deleted = engine.delete_definition(&definition.id).await?;
            output::print(&DeletedChore(deleted), format);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "chore_tests.rs"]
mod tests;
