// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reward totals from the file ledger

use crate::app::Engine;
use crate::output::{self, OutputFormat, RewardRow, RewardTotal};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct RewardsArgs {
    /// List one member's rewards instead of totals
    #[arg(long)]
    pub member: Option<String>,
}

pub async fn handle(engine: &Engine, args: RewardsArgs, format: OutputFormat) -> Result<()> {
    let ledger = engine.ledger().inner();

    match args.member {
        Some(member) => {
            let rows: Vec<RewardRow> = ledger
                .entries()
                .await?
                .into_iter()
                .filter(|entry| entry.member_id.0 == member)
                .map(RewardRow)
                .collect();
            output::print_list(&rows, RewardRow::HEADER, "No rewards", format);
        }
        None => {
            let rows: Vec<RewardTotal> = ledger
                .totals()
                .await?
                .into_iter()
                .map(|(member, rewards)| RewardTotal {
                    member: member.0,
                    rewards,
                })
                .collect();
            output::print_list(&rows, RewardTotal::HEADER, "No rewards", format);
        }
    }
    Ok(())
}
