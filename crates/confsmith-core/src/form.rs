// ── Form state ──

use crate::model::{DhcpConfig, RoutingConfig, SecurityConfig, TelephonyConfig};
use crate::registry::InterfaceRegistry;

/// Everything the operator has entered, as one plain data snapshot.
///
/// Validation and assembly operate on this type alone — no UI coupling.
/// The registry owns the interface entries; the section configs are raw
/// field state.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub interfaces: InterfaceRegistry,
    pub routing: RoutingConfig,
    pub telephony: TelephonyConfig,
    pub security: SecurityConfig,
    pub dhcp: DhcpConfig,
}
