// ── Policy defaults ──

use serde::{Deserialize, Serialize};

/// Site policy values attached to every request.
///
/// Historically these were literals inlined at the call site; they are an
/// explicit input now, with the historical values as defaults. The config
/// layer lets deployments override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyDefaults {
    /// Maximum ephones configured by `telephony-service`.
    pub max_ephones: u32,

    /// Maximum directory numbers; also the roster size sent per request.
    pub max_dn: u32,

    /// Telephony `ip source-address`.
    pub ip_source_address: String,

    /// Ephone auto-assign range descriptor.
    pub auto_assign_range: String,

    /// DHCP excluded-address range, start and end.
    pub dhcp_excluded: (String, String),
}

impl Default for PolicyDefaults {
    fn default() -> Self {
        Self {
            max_ephones: 3,
            max_dn: 3,
            ip_source_address: "10.0.0.1".into(),
            auto_assign_range: "1 to 3".into(),
            dhcp_excluded: ("10.0.0.1".into(), "10.0.0.10".into()),
        }
    }
}
