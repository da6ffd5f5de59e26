//! TOML form-file schema and loading.
//!
//! The form file is the CLI's stand-in for the interactive form: one
//! document describing interfaces, routing, telephony, security, and
//! DHCP. Loading goes through the interface registry so the capacity
//! limit is enforced the same way an interactive "add" would be.

use std::path::Path;

use serde::{Deserialize, Serialize};

use confsmith_api::DirectoryNumber;
use confsmith_core::model::{DhcpConfig, InterfaceDraft, RoutingConfig, SecurityConfig};
use confsmith_core::{CoreError, DN_SLOTS, FormState, TelephonyConfig};

use crate::error::CliError;

// ── File schema ─────────────────────────────────────────────────────

/// On-disk form document. Every section is optional; omitted sections
/// mean "not configured".
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFile {
    pub interfaces: Vec<InterfaceDraft>,
    pub routing: RoutingConfig,
    pub telephony: TelephonySection,
    pub security: SecurityConfig,
    pub dhcp: DhcpConfig,
}

/// `[telephony]` table: the roster is a variable-length list in the file
/// and gets padded to the fixed slot count on load.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephonySection {
    pub enabled: bool,
    pub extensions: Vec<DirectoryNumber>,
}

// ── Loading ─────────────────────────────────────────────────────────

/// Read and parse a form file, then build the registry-backed form state.
pub fn load_form(path: &Path) -> Result<FormState, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::FormRead {
        path: path.display().to_string(),
        source,
    })?;

    let file: FormFile = toml::from_str(&text).map_err(|source| CliError::FormParse {
        path: path.display().to_string(),
        source: Box::new(source),
    })?;

    build_form_state(file)
}

/// Turn a parsed form file into `FormState`, enforcing the registry
/// capacity and the roster size.
pub fn build_form_state(file: FormFile) -> Result<FormState, CliError> {
    let mut form = FormState::default();

    for draft in file.interfaces {
        form.interfaces.add(draft).map_err(|err| match err {
            CoreError::CapacityExceeded { max } => CliError::InterfaceLimit { max },
            other => other.into(),
        })?;
    }

    form.telephony = TelephonyConfig::with_extensions(file.telephony.enabled, file.telephony.extensions)
        .ok_or(CliError::ExtensionLimit { max: DN_SLOTS })?;

    form.routing = file.routing;
    form.security = file.security;
    form.dhcp = file.dhcp;

    Ok(form)
}

// ── Sample form ─────────────────────────────────────────────────────

/// The classic test fixture: three GigabitEthernet interfaces, OSPF with
/// a router id, multicast, a full telephony roster, SSH, and a DHCP pool.
pub fn sample() -> FormFile {
    FormFile {
        interfaces: vec![
            InterfaceDraft {
                name: "GigabitEthernet0/0".into(),
                ip: "192.168.1.1".into(),
                mask: "255.255.255.0".into(),
                no_shutdown: true,
            },
            InterfaceDraft {
                name: "GigabitEthernet0/1".into(),
                ip: "172.16.0.1".into(),
                mask: "255.255.0.0".into(),
                no_shutdown: false,
            },
            InterfaceDraft {
                name: "GigabitEthernet0/2".into(),
                ip: "10.0.0.1".into(),
                mask: "255.255.255.252".into(),
                no_shutdown: true,
            },
        ],
        routing: RoutingConfig {
            protocol: confsmith_core::RoutingProtocol::Ospf,
            router_id: "1.1.1.1".into(),
            multicast: true,
        },
        telephony: TelephonySection {
            enabled: true,
            extensions: vec![
                DirectoryNumber {
                    number: "1001".into(),
                    user: "user1".into(),
                },
                DirectoryNumber {
                    number: "1002".into(),
                    user: "user2".into(),
                },
                DirectoryNumber {
                    number: "1003".into(),
                    user: "user3".into(),
                },
            ],
        },
        security: SecurityConfig {
            hostname: "MyRouter".into(),
            enable_secret: "cisco123".into(),
            console_password: "console2024".into(),
            vty_password: "vtypass2025".into(),
            ssh_enabled: true,
        },
        dhcp: DhcpConfig {
            network: "192.168.10.0".into(),
            mask: "255.255.255.0".into(),
            gateway: "192.168.10.1".into(),
            dns: "8.8.8.8".into(),
        },
    }
}
