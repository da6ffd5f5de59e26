// ── DHCP section ──

use serde::{Deserialize, Serialize};

/// DHCP pool section of the form.
///
/// Either configured (network and mask both present) or fully inert; a
/// blank section means "no DHCP pool" and is valid. The excluded-address
/// range is policy, not form input — see `PolicyDefaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DhcpConfig {
    pub network: String,
    pub mask: String,
    pub gateway: String,
    pub dns: String,
}

impl DhcpConfig {
    /// Whether the operator started configuring a pool.
    pub fn in_use(&self) -> bool {
        !self.network.trim().is_empty() || !self.mask.trim().is_empty()
    }
}
