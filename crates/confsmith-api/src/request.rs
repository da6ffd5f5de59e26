// Wire types for the generator call.
//
// The generator's historical interface was a positional 23-argument call;
// this module replaces it with one named JSON document. Field names match
// the generator's parameter names 1:1 so the mapping on the far side stays
// mechanical, and field order follows the old positional order.

use serde::{Deserialize, Serialize};

/// One telephony extension slot: an extension number and the user it is
/// assigned to. Either half may be blank — the generator decides how to
/// treat partially filled slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNumber {
    pub number: String,
    pub user: String,
}

/// The complete generation request.
///
/// A value snapshot built once per submission attempt; nothing mutates it
/// after assembly. This is the sole payload crossing the boundary to the
/// generator service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Routing protocol wire name (`"OSPF"`, `"RIP"`, …) or empty for none.
    pub routing_protocol: String,

    /// Reserved. The generator's signature keeps a legacy alias slot here;
    /// always sent empty.
    pub proto: String,

    /// OSPF router identifier (empty unless the protocol needs one).
    pub router_id: String,

    /// Enable multicast routing on every interface.
    pub ip_multicast: bool,

    // ── Telephony ───────────────────────────────────────────────────
    pub telephony_enabled: bool,

    /// Fixed-size roster of extension slots (always [`Self::max_dn`] long).
    pub dn_list: Vec<DirectoryNumber>,

    // ── Security ────────────────────────────────────────────────────
    pub enable_ssh: bool,
    pub hostname: String,
    pub enable_secret: String,
    pub console_password: String,
    pub vty_password: String,

    // ── DHCP pool ───────────────────────────────────────────────────
    pub dhcp_network: String,
    pub dhcp_mask: String,
    pub dhcp_gateway: String,
    pub dhcp_dns: String,

    // ── Interfaces ──────────────────────────────────────────────────
    /// Interface names, in the order the operator defined them.
    pub interfaces: Vec<String>,

    /// `[ip, mask]` per interface, parallel to [`Self::interfaces`].
    pub networks: Vec<(String, String)>,

    /// Subsequence of [`Self::interfaces`] to administratively enable.
    pub no_shutdown_interfaces: Vec<String>,

    // ── Policy constants ────────────────────────────────────────────
    pub max_ephones: u32,
    pub max_dn: u32,

    /// Telephony source address for `ip source-address`.
    pub ip_source_address: String,

    /// Ephone auto-assign range descriptor (e.g. `"1 to 3"`).
    pub auto_assign_range: String,

    /// DHCP excluded-address range, `[start, end]`.
    pub dhcp_excluded: (String, String),
}
