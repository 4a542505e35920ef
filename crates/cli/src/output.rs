// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::ValueEnum;
use cw_adapters::LedgerEntry;
use cw_core::{ChoreDefinition, ChoreInstance, InstanceStatus};
use serde::Serialize;
use std::fmt;

/// Width ids are shortened to in tables; any unique prefix resolves
const SHORT_ID: usize = 12;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items, with a header line in text mode
pub fn print_list<T: Serialize + fmt::Display>(
    items: &[T],
    header: &str,
    empty: &str,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text if items.is_empty() => println!("{}", empty),
        OutputFormat::Text => {
            println!("{}", header);
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID).unwrap_or(id)
}

fn schedule(definition: &ChoreDefinition) -> String {
    match (&definition.recurrence_pattern, definition.is_recurring) {
        (Some(pattern), true) => pattern.to_string(),
        (None, true) => "daily".to_string(),
        (_, false) => "once".to_string(),
    }
}

fn assignees(definition: &ChoreDefinition) -> String {
    let rotation = definition.rotation();
    if !rotation.is_empty() {
        let names: Vec<&str> = rotation.iter().map(|m| m.0.as_str()).collect();
        return names.join(",");
    }
    definition
        .default_member_id
        .as_ref()
        .map_or_else(|| "-".to_string(), |m| m.0.clone())
}

/// One row of `cw chore list`
#[derive(Serialize)]
#[serde(transparent)]
pub struct ChoreRow(pub ChoreDefinition);

impl ChoreRow {
    pub const HEADER: &'static str = "ID           NAME                 SCHEDULE                 MEMBERS";
}

impl fmt::Display for ChoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<20} {:<24} {}",
            short_id(&self.0.id.0),
            self.0.name,
            schedule(&self.0),
            assignees(&self.0)
        )
    }
}

/// Output of `cw chore show`
#[derive(Serialize)]
pub struct ChoreDetail {
    #[serde(flatten)]
    pub definition: ChoreDefinition,
    pub pending: Option<ChoreInstance>,
}

impl fmt::Display for ChoreDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.definition;
        writeln!(f, "Chore: {}", d.id)?;
        writeln!(f, "  Name: {}", d.name)?;
        writeln!(f, "  Schedule: {}", schedule(d))?;
        if let Some(time) = d.due_time {
            writeln!(f, "  Due time: {}", time.format("%H:%M"))?;
        }
        let rotation = d.rotation();
        if !rotation.is_empty() {
            let names: Vec<&str> = rotation.iter().map(|m| m.0.as_str()).collect();
            writeln!(f, "  Rotation: {}", names.join(", "))?;
            if let Some(current) = rotation.get(d.current_rotation_index) {
                writeln!(f, "  Current: {}", current)?;
            }
        }
        if let Some(member) = &d.default_member_id {
            writeln!(f, "  Default member: {}", member)?;
        }
        match &self.pending {
            Some(p) => write!(
                f,
                "  Pending: {} ({}, due {})",
                p.id, p.assigned_member_id, p.due_date
            ),
            None => write!(f, "  Pending: none"),
        }
    }
}

/// Output of `cw chore rm`
#[derive(Serialize)]
#[serde(transparent)]
pub struct DeletedChore(pub ChoreDefinition);

impl fmt::Display for DeletedChore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted chore {} ({})", self.0.name, short_id(&self.0.id.0))
    }
}

/// One row of `cw list`
#[derive(Serialize)]
pub struct InstanceRow {
    pub id: String,
    pub chore_definition_id: String,
    pub chore: String,
    pub assigned_member_id: String,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
    pub status: InstanceStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub reward_id: Option<String>,
}

impl InstanceRow {
    pub const HEADER: &'static str = "ID           CHORE                MEMBER     DUE              STATUS";

    pub fn new(instance: ChoreInstance, chore: impl Into<String>) -> Self {
        Self {
            status: instance.status(),
            id: instance.id.0,
            chore_definition_id: instance.chore_definition_id.0,
            chore: chore.into(),
            assigned_member_id: instance.assigned_member_id.0,
            due_date: instance.due_date,
            due_time: instance.due_time,
            completed_at: instance.completed_at,
            reward_id: instance.reward_id.map(|r| r.0),
        }
    }
}

impl fmt::Display for InstanceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let due = match self.due_time {
            Some(time) => format!("{} {}", self.due_date, time.format("%H:%M")),
            None => self.due_date.to_string(),
        };
        write!(
            f,
            "{:<12} {:<20} {:<10} {:<16} {}",
            short_id(&self.id),
            self.chore,
            self.assigned_member_id,
            due,
            self.status
        )
    }
}

/// Reward count for one member
#[derive(Serialize)]
pub struct RewardTotal {
    pub member: String,
    pub rewards: usize,
}

impl RewardTotal {
    pub const HEADER: &'static str = "MEMBER       REWARDS";
}

impl fmt::Display for RewardTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.member, self.rewards)
    }
}

/// One reward in `cw rewards --member`
#[derive(Serialize)]
#[serde(transparent)]
pub struct RewardRow(pub LedgerEntry);

impl RewardRow {
    pub const HEADER: &'static str = "ID       AWARDED           REASON";
}

impl fmt::Display for RewardRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<17} {}",
            self.0.id,
            self.0.awarded_at.format("%Y-%m-%d %H:%M"),
            self.0.reason
        )
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
