// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Chorewheel lifecycle engine

mod error;
mod lifecycle;

pub use error::{EngineError, InvalidTransition};
pub use lifecycle::{ChoreEngine, EngineConfig, EngineDeps, NAME_PLACEHOLDER};
