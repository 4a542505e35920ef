// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chore instance lifecycle
//!
//! Creates first instances, completes and un-completes instances, and keeps
//! each definition's rotation pointer in step with its completed history.
//!
//! Every operation runs inside one store transaction. Preconditions are
//! checked and writes are staged first; the reward ledger is called last,
//! just before commit, so a ledger failure leaves nothing behind. A commit
//! failure after a successful ledger call is compensated on the ledger.

use crate::error::{EngineError, InvalidTransition};
use cw_adapters::{RewardGrant, RewardLedger};
use cw_core::recurrence::{initial_due_date, next_due_date};
use cw_core::rotation;
use cw_core::{
    ChoreDefinition, ChoreDefinitionId, ChoreInstance, Clock, DefinitionPatch, IdGen, InstanceId,
    InstancePatch, NewChoreDefinition, CHORE_PREFIX, INSTANCE_PREFIX,
};
use cw_storage::{DefinitionStore, InstanceFilter, InstanceStore, Store, Transaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Placeholder in [`EngineConfig::reward_reason`] replaced by the chore name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// How rewards are described when issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub awarded_by: String,
    pub reward_reason: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            awarded_by: "system".to_string(),
            reward_reason: format!("Completed chore: {}", NAME_PLACEHOLDER),
        }
    }
}

impl EngineConfig {
    fn grant_for(&self, definition: &ChoreDefinition) -> RewardGrant {
        RewardGrant::new(
            self.reward_reason.replace(NAME_PLACEHOLDER, &definition.name),
            self.awarded_by.clone(),
        )
    }
}

/// Engine dependencies
pub struct EngineDeps<L> {
    pub store: Store,
    pub ledger: L,
}

/// Chore scheduling and rotation engine
pub struct ChoreEngine<L, C: Clock, I: IdGen> {
    store: Store,
    ledger: L,
    clock: C,
    id_gen: I,
    config: EngineConfig,
}

impl<L, C, I> ChoreEngine<L, C, I>
where
    L: RewardLedger,
    C: Clock,
    I: IdGen,
{
    pub fn new(deps: EngineDeps<L>, clock: C, id_gen: I, config: EngineConfig) -> Self {
        Self {
            store: deps.store,
            ledger: deps.ledger,
            clock,
            id_gen,
            config,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Store a new definition together with its first instance
    ///
    /// Nothing is stored when the definition is invalid or nobody can be
    /// assigned the first instance.
    pub async fn create_definition(
        &self,
        new: NewChoreDefinition,
    ) -> Result<(ChoreDefinition, ChoreInstance), EngineError> {
        new.validate()?;
        let id = ChoreDefinitionId(self.id_gen.next(CHORE_PREFIX));
        let definition = ChoreDefinition::from_new(id, new);

        let mut tx = self.store.begin().await;
        let instance = self.initial_instance(&definition)?;
        tx.create_definition(definition.clone());
        tx.create_instance(instance.clone());
        tx.commit()?;

        info!(
            chore = %definition.id,
            name = %definition.name,
            instance = %instance.id,
            member = %instance.assigned_member_id,
            due = %instance.due_date,
            "chore created"
        );
        Ok((definition, instance))
    }

    /// Create the first pending instance of a stored definition
    pub async fn create_initial_instance(
        &self,
        id: &ChoreDefinitionId,
    ) -> Result<ChoreInstance, EngineError> {
        let mut tx = self.store.begin().await;
        let definition = tx
            .definition(id)
            .ok_or_else(|| EngineError::definition_not_found(id))?;
        if let Some(pending) = tx.pending_instance(id) {
            return Err(EngineError::PendingExists {
                definition: id.clone(),
                instance: pending.id,
            });
        }

        let instance = self.initial_instance(&definition)?;
        tx.create_instance(instance.clone());
        tx.commit()?;

        info!(chore = %id, instance = %instance.id, "initial instance created");
        Ok(instance)
    }

    /// Mark a pending instance completed, issue its reward, and schedule
    /// the next occurrence of a recurring chore
    pub async fn complete(&self, id: &InstanceId) -> Result<ChoreInstance, EngineError> {
        let mut tx = self.store.begin().await;
        let (instance, definition) = load(&tx, id)?;
        if !instance.is_pending() {
            return Err(EngineError::InvalidState {
                instance: id.clone(),
                reason: InvalidTransition::AlreadyCompleted,
            });
        }

        let successor = definition
            .is_recurring
            .then(|| self.stage_successor(&mut tx, &definition, &instance));

        let reward = self
            .ledger
            .award(&instance.assigned_member_id, &self.config.grant_for(&definition))
            .await?;

        let patch = InstancePatch::Complete {
            completed_at: self.clock.now(),
            reward_id: Some(reward.clone()),
        };
        tx.update_instance(id, patch.clone());

        if let Err(e) = tx.commit() {
            error!(instance = %id, reward = %reward, error = %e, "commit failed, revoking reward");
            if let Err(undo) = self.ledger.remove(&reward).await {
                error!(reward = %reward, error = %undo, "could not revoke reward");
            }
            return Err(e.into());
        }

        info!(
            instance = %id,
            member = %instance.assigned_member_id,
            reward = %reward,
            successor = successor.as_ref().map(|s| s.0.as_str()),
            "instance completed"
        );

        let mut completed = instance;
        patch.apply(&mut completed);
        Ok(completed)
    }

    /// Reverse a completion: revoke the reward, reopen the instance, remove
    /// the occurrence the completion scheduled, and step the rotation back
    pub async fn uncomplete(&self, id: &InstanceId) -> Result<ChoreInstance, EngineError> {
        let mut tx = self.store.begin().await;
        let (instance, definition) = load(&tx, id)?;
        if instance.is_pending() {
            return Err(EngineError::InvalidState {
                instance: id.clone(),
                reason: InvalidTransition::NotCompleted,
            });
        }

        // The only pending instance this undo may displace is the one its
        // completion scheduled.
        if let Some(pending) = tx.pending_instance(&definition.id) {
            if !definition.is_recurring || pending.due_date <= instance.due_date {
                return Err(EngineError::InvalidState {
                    instance: id.clone(),
                    reason: InvalidTransition::BlockedByPending,
                });
            }
        }

        tx.update_instance(id, InstancePatch::Reopen);

        let mut removed_successor = None;
        if definition.is_recurring {
            removed_successor = tx.delete_earliest_pending_after(&definition.id, instance.due_date);
            if let Some(index) = rotation::revert(&definition) {
                tx.update_definition(&definition.id, DefinitionPatch::rotation_index(index));
            }
        }

        if let Some(reward) = &instance.reward_id {
            self.ledger.remove(reward).await?;
        }

        if let Err(e) = tx.commit() {
            if let Some(reward) = &instance.reward_id {
                error!(instance = %id, reward = %reward, error = %e, "commit failed, re-issuing reward");
                let grant = self.config.grant_for(&definition);
                match self.ledger.award(&instance.assigned_member_id, &grant).await {
                    Ok(reissued) => warn!(instance = %id, reward = %reissued, "reward re-issued under new id"),
                    Err(undo) => error!(instance = %id, error = %undo, "could not re-issue reward"),
                }
            }
            return Err(e.into());
        }

        info!(
            instance = %id,
            removed_successor = removed_successor.as_ref().map(|s| s.0.as_str()),
            "instance reopened"
        );

        let mut reopened = instance;
        InstancePatch::Reopen.apply(&mut reopened);
        Ok(reopened)
    }

    /// Delete a definition and its pending instance
    ///
    /// Completed instances stay as history and their rewards are untouched.
    pub async fn delete_definition(
        &self,
        id: &ChoreDefinitionId,
    ) -> Result<ChoreDefinition, EngineError> {
        let mut tx = self.store.begin().await;
        let definition = tx
            .definition(id)
            .ok_or_else(|| EngineError::definition_not_found(id))?;

        let pending = tx.pending_instance(id);
        if let Some(pending) = &pending {
            tx.delete_instance(&pending.id);
        }
        tx.delete_definition(id);
        tx.commit()?;

        info!(
            chore = %id,
            cancelled = pending.as_ref().map(|p| p.id.0.as_str()),
            "chore deleted"
        );
        Ok(definition)
    }

    /// Look up a definition by id or unique id prefix
    pub async fn definition(&self, id: &str) -> Result<ChoreDefinition, EngineError> {
        self.store
            .read(|state| state.get_definition(id).cloned())
            .await
            .ok_or_else(|| EngineError::definition_not_found(id))
    }

    /// Look up an instance by id or unique id prefix
    pub async fn instance(&self, id: &str) -> Result<ChoreInstance, EngineError> {
        self.store
            .read(|state| state.get_instance(id).cloned())
            .await
            .ok_or_else(|| EngineError::instance_not_found(id))
    }

    /// The pending instance of a definition, if any
    pub async fn pending_instance(&self, id: &ChoreDefinitionId) -> Option<ChoreInstance> {
        self.store
            .read(|state| state.pending_instance(id).cloned())
            .await
    }

    pub async fn definitions(&self) -> Vec<ChoreDefinition> {
        self.store.definitions().await
    }

    pub async fn instances(&self, filter: &InstanceFilter) -> Vec<ChoreInstance> {
        self.store.instances(filter).await
    }

    fn initial_instance(&self, definition: &ChoreDefinition) -> Result<ChoreInstance, EngineError> {
        let assignee = rotation::first_assignee(definition).ok_or_else(|| {
            warn!(chore = %definition.id, "no rotation members and no default member");
            EngineError::ConfigurationGap {
                chore: definition.name.clone(),
            }
        })?;
        let due = initial_due_date(definition.recurrence_pattern.as_ref(), self.clock.today());

        Ok(ChoreInstance::pending(
            InstanceId(self.id_gen.next(INSTANCE_PREFIX)),
            definition.id.clone(),
            assignee.clone(),
            due,
            definition.due_time,
        ))
    }

    /// Stage the next occurrence and, for a moving rotation, the pointer advance
    fn stage_successor(
        &self,
        tx: &mut Transaction<'_>,
        definition: &ChoreDefinition,
        current: &ChoreInstance,
    ) -> InstanceId {
        let due = next_due_date(current.due_date, definition.recurrence_pattern.as_ref());

        let assignee = match rotation::advance(definition) {
            Some(index) => {
                tx.update_definition(&definition.id, DefinitionPatch::rotation_index(index));
                rotation::next_assignee(definition)
                    .cloned()
                    .unwrap_or_else(|| current.assigned_member_id.clone())
            }
            None => current.assigned_member_id.clone(),
        };
        debug!(chore = %definition.id, member = %assignee, due = %due, "next occurrence");

        let successor = ChoreInstance::pending(
            InstanceId(self.id_gen.next(INSTANCE_PREFIX)),
            definition.id.clone(),
            assignee,
            due,
            current.due_time,
        );
        let id = successor.id.clone();
        tx.create_instance(successor);
        id
    }
}

/// Fetch an instance and its owning definition
fn load<S>(store: &S, id: &InstanceId) -> Result<(ChoreInstance, ChoreDefinition), EngineError>
where
    S: DefinitionStore + InstanceStore,
{
    let instance = store
        .instance(id)
        .ok_or_else(|| EngineError::instance_not_found(id))?;
    let definition = store
        .definition(&instance.chore_definition_id)
        .ok_or_else(|| EngineError::definition_not_found(&instance.chore_definition_id))?;
    Ok((instance, definition))
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
