// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance listing

use crate::app::Engine;
use crate::output::{self, InstanceRow, OutputFormat};
use anyhow::Result;
use clap::Args;
use cw_core::MemberId;
use cw_storage::InstanceFilter;
use std::collections::HashMap;

#[derive(Args)]
pub struct ListArgs {
    /// Only instances of this chore (id or unique prefix)
    #[arg(long)]
    pub chore: Option<String>,

    /// Only instances assigned to this member
    #[arg(long)]
    pub member: Option<String>,

    /// Only pending instances
    #[arg(long)]
    pub pending: bool,
}

pub async fn handle(engine: &Engine, args: ListArgs, format: OutputFormat) -> Result<()> {
    let definition = match &args.chore {
        Some(id) => Some(engine.definition(id).await?.id),
        None => None,
    };
    let filter = InstanceFilter {
        definition,
        member: args.member.map(MemberId),
        pending_only: args.pending,
    };

    let names: HashMap<_, _> = engine
        .definitions()
        .await
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    let rows: Vec<InstanceRow> = engine
        .instances(&filter)
        .await
        .into_iter()
        .map(|instance| {
            let chore = names
                .get(&instance.chore_definition_id)
                .map_or("(deleted)", String::as_str)
                .to_string();
            InstanceRow::new(instance, chore)
        })
        .collect();

    output::print_list(&rows, InstanceRow::HEADER, "No chore instances", format);
    Ok(())
}
