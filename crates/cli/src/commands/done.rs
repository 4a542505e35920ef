// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completing and un-completing instances

use crate::app::Engine;
use crate::output::{self, short_id, InstanceRow, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct InstanceArgs {
    /// Instance id or unique prefix
    pub id: String,
}

pub async fn done(engine: &Engine, args: InstanceArgs, format: OutputFormat) -> Result<()> {
    let instance = engine.instance(&args.id).await?;
    let definition = engine.definition(&instance.chore_definition_id.0).await?;
    let completed = engine.complete(&instance.id).await?;

    match format {
        OutputFormat::Text => {
            println!(
                "Completed {} for {} ({})",
                definition.name,
                completed.assigned_member_id,
                short_id(&completed.id.0)
            );
            if let Some(reward) = &completed.reward_id {
                println!("Reward: {}", reward);
            }
            if let Some(next) = engine.pending_instance(&definition.id).await {
                println!(
                    "Next: {} on {} ({})",
                    next.assigned_member_id,
                    next.due_date,
                    short_id(&next.id.0)
                );
            }
        }
        OutputFormat::Json => output::print(&InstanceRow::new(completed, definition.name), format),
    }
    Ok(())
}

pub async fn undo(engine: &Engine, args: InstanceArgs, format: OutputFormat) -> Result<()> {
    let instance = engine.instance(&args.id).await?;
    let definition = engine.definition(&instance.chore_definition_id.0).await?;
    let reopened = engine.uncomplete(&instance.id).await?;

    match format {
        OutputFormat::Text => println!(
            "Reopened {} for {} ({})",
            definition.name,
            reopened.assigned_member_id,
            short_id(&reopened.id.0)
        ),
        OutputFormat::Json => output::print(&InstanceRow::new(reopened, definition.name), format),
    }
    Ok(())
}
