// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command handlers

pub mod chore;
pub mod done;
pub mod list;
pub mod rewards;
