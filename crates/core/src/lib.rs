// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-core: Core library for chorewheel
//!
//! This crate provides:
//! - The chore data model (definitions, instances, operations)
//! - Pure due-date arithmetic and rotation assignment
//! - Clock and id generation abstractions

pub mod clock;
pub mod id;

pub mod chore;
pub mod instance;
pub mod operation;
pub mod recurrence;
pub mod rotation;

// Re-exports
pub use chore::{
    ChoreDefinition, ChoreDefinitionId, DefinitionError, DefinitionPatch, MemberId,
    NewChoreDefinition,
};
pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{IdGen, SequentialIdGen, UuidIdGen, CHORE_PREFIX, INSTANCE_PREFIX};
pub use instance::{ChoreInstance, InstanceId, InstancePatch, InstanceStatus, RewardId};
pub use operation::Operation;
pub use recurrence::{Frequency, PatternError, RecurrencePattern};
