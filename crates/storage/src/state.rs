// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

use chrono::NaiveDate;
use cw_core::{
    ChoreDefinition, ChoreDefinitionId, ChoreInstance, InstanceId, MemberId, Operation,
};
use std::collections::HashMap;

/// Materialized state built from WAL operations
#[derive(Debug, Default, Clone)]
pub struct MaterializedState {
    pub definitions: HashMap<ChoreDefinitionId, ChoreDefinition>,
    pub instances: HashMap<InstanceId, ChoreInstance>,
}

/// Which instances a listing should include
#[derive(Debug, Clone, Default)]
pub struct InstanceFilter {
    pub definition: Option<ChoreDefinitionId>,
    pub member: Option<MemberId>,
    pub pending_only: bool,
}

impl InstanceFilter {
    fn matches(&self, instance: &ChoreInstance) -> bool {
        let definition_ok = self
            .definition
            .as_ref()
            .map_or(true, |d| *d == instance.chore_definition_id);
        let member_ok = self
            .member
            .as_ref()
            .map_or(true, |m| *m == instance.assigned_member_id);
        definition_ok && member_ok && (!self.pending_only || instance.is_pending())
    }
}

impl MaterializedState {
    /// Rebuild state from replayed WAL batches
    pub fn from_batches(batches: &[Vec<Operation>]) -> Self {
        let mut state = Self::default();
        for op in batches.iter().flatten() {
            state.apply(op);
        }
        state
    }

    /// Get a definition by ID or unique prefix (like git commit hashes)
    pub fn get_definition(&self, id: &str) -> Option<&ChoreDefinition> {
        self.definitions
            .get(&ChoreDefinitionId::from(id))
            .or_else(|| unique_prefix(&self.definitions, id, |k| k.0.as_str()))
    }

    /// Get an instance by ID or unique prefix
    pub fn get_instance(&self, id: &str) -> Option<&ChoreInstance> {
        self.instances
            .get(&InstanceId::from(id))
            .or_else(|| unique_prefix(&self.instances, id, |k| k.0.as_str()))
    }

    /// The pending instance of a definition, if any
    pub fn pending_instance(&self, definition: &ChoreDefinitionId) -> Option<&ChoreInstance> {
        self.instances_of(definition)
            .into_iter()
            .find(|i| i.is_pending())
    }

    /// Earliest pending instance of a definition due strictly after `after`
    pub fn earliest_pending_after(
        &self,
        definition: &ChoreDefinitionId,
        after: NaiveDate,
    ) -> Option<&ChoreInstance> {
        self.instances_of(definition)
            .into_iter()
            .find(|i| i.is_pending() && i.due_date > after)
    }

    /// All instances of a definition ordered by due date
    pub fn instances_of(&self, definition: &ChoreDefinitionId) -> Vec<&ChoreInstance> {
        self.list_instances(&InstanceFilter {
            definition: Some(definition.clone()),
            ..InstanceFilter::default()
        })
    }

    /// Instances matching a filter, ordered by due date then id
    pub fn list_instances(&self, filter: &InstanceFilter) -> Vec<&ChoreInstance> {
        let mut instances: Vec<_> = self
            .instances
            .values()
            .filter(|i| filter.matches(i))
            .collect();
        instances.sort_by(|a, b| (a.due_date, &a.id).cmp(&(b.due_date, &b.id)));
        instances
    }

    /// All definitions ordered by name then id
    pub fn list_definitions(&self) -> Vec<&ChoreDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().collect();
        definitions.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        definitions
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::DefinitionCreate { definition } => {
                self.definitions
                    .insert(definition.id.clone(), definition.clone());
            }

            Operation::DefinitionUpdate { id, patch } => {
                if let Some(definition) = self.definitions.get_mut(id) {
                    patch.apply(definition);
                }
            }

            Operation::DefinitionDelete { id } => {
                self.definitions.remove(id);
            }

            Operation::InstanceCreate { instance } => {
                self.instances.insert(instance.id.clone(), instance.clone());
            }

            Operation::InstanceUpdate { id, patch } => {
                if let Some(instance) = self.instances.get_mut(id) {
                    patch.apply(instance);
                }
            }

            Operation::InstanceDelete { id } => {
                self.instances.remove(id);
            }
        }
    }
}

/// Value whose key starts with `prefix`, only if exactly one does
fn unique_prefix<'a, K, V>(
    map: &'a HashMap<K, V>,
    prefix: &str,
    key: impl Fn(&K) -> &str,
) -> Option<&'a V> {
    let mut matches = map.iter().filter(|(k, _)| key(*k).starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some((_, value)), None) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
