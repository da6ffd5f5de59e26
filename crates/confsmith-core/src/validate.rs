// ── Field validation ──
//
// Pure, stateless checks over a FormState snapshot. Rules run in a fixed
// order and the first failure wins — exactly one error is reported per
// failed submission attempt, never an aggregate.
//
// Rule order: interface presence, interface completeness, OSPF router-id,
// password policy, DHCP coherence.

use std::fmt;

use thiserror::Error;

use crate::form::FormState;
use crate::model::InterfaceDefinition;

/// Which password field a policy violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    EnableSecret,
    Console,
    Vty,
}

impl fmt::Display for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnableSecret => "enable secret",
            Self::Console => "console password",
            Self::Vty => "VTY password",
        };
        write!(f, "{name}")
    }
}

/// A single structured validation failure, with enough context to point
/// the operator at the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("add at least one interface with a name and an IP address or mask")]
    NoInterfaces,

    /// Ordinal is 1-based to match what the operator sees.
    #[error("interface #{} needs a name, an IP address, and a subnet mask", .index + 1)]
    IncompleteInterface { index: usize },

    #[error("OSPF requires a router ID")]
    MissingRouterId,

    #[error("router ID '{value}' is not a valid IPv4 address")]
    InvalidRouterIdFormat { value: String },

    #[error("router ID must not be 0.0.0.0")]
    ZeroRouterId,

    #[error("{field} must be at least 8 characters long")]
    PasswordTooShort { field: PasswordField },

    #[error("{field} must contain at least one letter and one digit")]
    PasswordMissingComplexity { field: PasswordField },

    #[error("DHCP needs both a network and a mask (or neither)")]
    DhcpIncomplete,

    #[error("{field} '{value}' is not a valid IPv4 address")]
    InvalidIpv4 {
        field: &'static str,
        value: String,
    },
}

/// IPv4 format check: exactly four dot-separated octets, each a run of
/// ASCII digits reading 0–255 as plain decimal. Leading zeros are
/// tolerated (`010` reads as 10), matching the historical behavior.
pub fn is_ipv4(value: &str) -> bool {
    let mut octets = 0;
    for octet in value.split('.') {
        octets += 1;
        if octets > 4 || octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match octet.parse::<u32>() {
            Ok(n) if n <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

/// Run every rule over the snapshot; the first failing rule's error is
/// returned and later rules are not evaluated.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    check_interfaces(form)?;
    check_router_id(form)?;
    check_passwords(form)?;
    check_dhcp(form)?;
    Ok(())
}

fn check_interfaces(form: &FormState) -> Result<(), ValidationError> {
    let entries = form.interfaces.list();

    if !entries.iter().any(InterfaceDefinition::is_filled) {
        return Err(ValidationError::NoInterfaces);
    }

    // Fully blank entries are ignored; anything partially entered must be
    // completed before submission.
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_blank() {
            continue;
        }
        if entry.name.trim().is_empty()
            || entry.ip.trim().is_empty()
            || entry.mask.trim().is_empty()
        {
            return Err(ValidationError::IncompleteInterface { index });
        }
    }

    Ok(())
}

fn check_router_id(form: &FormState) -> Result<(), ValidationError> {
    if !form.routing.protocol.requires_router_id() {
        return Ok(());
    }

    let router_id = form.routing.router_id.trim();
    if router_id.is_empty() {
        return Err(ValidationError::MissingRouterId);
    }
    if !is_ipv4(router_id) {
        return Err(ValidationError::InvalidRouterIdFormat {
            value: router_id.to_owned(),
        });
    }
    if router_id == "0.0.0.0" {
        return Err(ValidationError::ZeroRouterId);
    }

    Ok(())
}

fn check_passwords(form: &FormState) -> Result<(), ValidationError> {
    let fields = [
        (&form.security.enable_secret, PasswordField::EnableSecret),
        (&form.security.console_password, PasswordField::Console),
        (&form.security.vty_password, PasswordField::Vty),
    ];

    for (value, field) in fields {
        check_password(value.trim(), field)?;
    }
    Ok(())
}

fn check_password(value: &str, field: PasswordField) -> Result<(), ValidationError> {
    // Empty means "not configured" — the generator omits the lines.
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort { field });
    }
    let has_alpha = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !has_alpha || !has_digit {
        return Err(ValidationError::PasswordMissingComplexity { field });
    }
    Ok(())
}

fn check_dhcp(form: &FormState) -> Result<(), ValidationError> {
    let network = form.dhcp.network.trim();
    let mask = form.dhcp.mask.trim();
    let gateway = form.dhcp.gateway.trim();

    if form.dhcp.in_use() {
        if network.is_empty() || mask.is_empty() {
            return Err(ValidationError::DhcpIncomplete);
        }
        if !is_ipv4(network) {
            return Err(ValidationError::InvalidIpv4 {
                field: "DHCP network",
                value: network.to_owned(),
            });
        }
        if !is_ipv4(mask) {
            return Err(ValidationError::InvalidIpv4 {
                field: "DHCP mask",
                value: mask.to_owned(),
            });
        }
    }

    if !gateway.is_empty() && !is_ipv4(gateway) {
        return Err(ValidationError::InvalidIpv4 {
            field: "DHCP gateway",
            value: gateway.to_owned(),
        });
    }

    Ok(())
}
