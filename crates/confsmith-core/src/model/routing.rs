// ── Routing section ──

use serde::{Deserialize, Serialize};

/// Routing protocol selection.
///
/// The strum serialization is the *wire* name the generator expects
/// (`""` for none, `"IS-IS"` for Isis); the serde names are the
/// lowercase identifiers used in form files.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingProtocol {
    #[default]
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "RIP")]
    Rip,
    #[strum(serialize = "OSPF")]
    Ospf,
    #[strum(serialize = "EIGRP")]
    Eigrp,
    #[strum(serialize = "STATIC")]
    Static,
    #[strum(serialize = "BGP")]
    Bgp,
    #[strum(serialize = "IS-IS")]
    Isis,
}

impl RoutingProtocol {
    /// Whether this protocol requires a router id.
    pub fn requires_router_id(self) -> bool {
        matches!(self, Self::Ospf)
    }
}

/// Routing section of the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub protocol: RoutingProtocol,

    /// OSPF router identifier; meaningful only when `protocol` is OSPF.
    pub router_id: String,

    /// Enable multicast routing across all interfaces.
    pub multicast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_generator_expectations() {
        assert_eq!(RoutingProtocol::None.to_string(), "");
        assert_eq!(RoutingProtocol::Ospf.to_string(), "OSPF");
        assert_eq!(RoutingProtocol::Rip.to_string(), "RIP");
        assert_eq!(RoutingProtocol::Eigrp.to_string(), "EIGRP");
        assert_eq!(RoutingProtocol::Isis.to_string(), "IS-IS");
    }

    #[test]
    fn only_ospf_requires_a_router_id() {
        assert!(RoutingProtocol::Ospf.requires_router_id());
        assert!(!RoutingProtocol::Rip.requires_router_id());
        assert!(!RoutingProtocol::None.requires_router_id());
    }
}
