// ── Interface entry types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one interface entry, unique within its registry.
///
/// Ids come from a registry-owned monotonic counter — never reused within
/// a registry, and removal does not renumber surviving entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterfaceId(u64);

impl InterfaceId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator-entered fields for a new interface entry, before the registry
/// assigns an identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceDraft {
    pub name: String,
    pub ip: String,
    pub mask: String,
    pub no_shutdown: bool,
}

/// One interface block as it lives in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDefinition {
    pub id: InterfaceId,
    pub name: String,
    pub ip: String,
    pub mask: String,
    /// Administratively enable the interface in the generated config.
    pub no_shutdown: bool,
}

impl InterfaceDefinition {
    pub(crate) fn from_draft(id: InterfaceId, draft: InterfaceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ip: draft.ip,
            mask: draft.mask,
            no_shutdown: draft.no_shutdown,
        }
    }

    /// A fully blank entry: ignored by validation and assembly, not an error.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.ip.trim().is_empty() && self.mask.trim().is_empty()
    }

    /// A filled entry: has a name and at least one of ip/mask. Only filled
    /// entries are forwarded to the generator.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
            && (!self.ip.trim().is_empty() || !self.mask.trim().is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(name: &str, ip: &str, mask: &str) -> InterfaceDefinition {
        InterfaceDefinition::from_draft(
            InterfaceId::new(0),
            InterfaceDraft {
                name: name.into(),
                ip: ip.into(),
                mask: mask.into(),
                no_shutdown: false,
            },
        )
    }

    #[test]
    fn blank_entry_is_not_filled() {
        let e = entry("", "", "");
        assert!(e.is_blank());
        assert!(!e.is_filled());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(entry("  ", "\t", " ").is_blank());
    }

    #[test]
    fn name_plus_ip_is_filled() {
        let e = entry("GigabitEthernet0/0", "192.168.1.1", "");
        assert!(e.is_filled());
        assert!(!e.is_blank());
    }

    #[test]
    fn name_plus_mask_is_filled() {
        assert!(entry("GigabitEthernet0/0", "", "255.255.255.0").is_filled());
    }

    #[test]
    fn ip_without_name_is_not_filled() {
        let e = entry("", "192.168.1.1", "");
        assert!(!e.is_filled());
        assert!(!e.is_blank());
    }
}
