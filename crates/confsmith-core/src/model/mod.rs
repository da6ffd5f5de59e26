// ── Domain model ──
//
// Plain data types for everything the operator enters. Fields hold raw
// text as typed; trimming, defaulting, and wire conversion happen in
// `assemble`, format checks in `validate`.

pub mod dhcp;
pub mod interface;
pub mod routing;
pub mod security;
pub mod telephony;

pub use dhcp::DhcpConfig;
pub use interface::{InterfaceDefinition, InterfaceDraft, InterfaceId};
pub use routing::{RoutingConfig, RoutingProtocol};
pub use security::SecurityConfig;
pub use telephony::{TelephonyConfig, DN_SLOTS};
