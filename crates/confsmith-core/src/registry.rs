// ── Interface registry ──
//
// Owns the interface entries, assigns identities, and enforces the
// device-model capacity limit. Insertion order is significant: it is the
// ordinal shown to the operator ("interface #2") and the order forwarded
// to the generator.

use tracing::debug;

use crate::error::CoreError;
use crate::model::{InterfaceDefinition, InterfaceDraft, InterfaceId};

/// Hard device-model limit on live interface entries.
pub const MAX_INTERFACES: usize = 3;

/// Ordered collection of interface entries with registry-scoped identities.
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    entries: Vec<InterfaceDefinition>,
    next_id: u64,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, assigning it a fresh identity.
    ///
    /// Fails with [`CoreError::CapacityExceeded`] when the registry already
    /// holds [`MAX_INTERFACES`] entries.
    pub fn add(&mut self, draft: InterfaceDraft) -> Result<InterfaceId, CoreError> {
        if self.entries.len() >= MAX_INTERFACES {
            return Err(CoreError::CapacityExceeded {
                max: MAX_INTERFACES,
            });
        }

        let id = InterfaceId::new(self.next_id);
        self.next_id += 1;
        debug!(%id, "interface entry added");
        self.entries.push(InterfaceDefinition::from_draft(id, draft));
        Ok(id)
    }

    /// Remove an entry by id. Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, id: InterfaceId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            debug!(%id, "interface entry removed");
        }
    }

    pub fn get(&self, id: InterfaceId) -> Option<&InterfaceDefinition> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Mutable access for in-place field edits.
    pub fn get_mut(&mut self, id: InterfaceId) -> Option<&mut InterfaceDefinition> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Live entries in insertion order.
    pub fn list(&self) -> &[InterfaceDefinition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capability query backing the UI "add" affordance: `false` exactly
    /// when the registry is at capacity.
    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_INTERFACES
    }
}
