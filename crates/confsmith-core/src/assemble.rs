// ── Request assembly ──
//
// Builds the immutable wire request from a form snapshot plus policy.
// Assembly applies its own defaulting for a missing ip/mask on a filled
// entry; the validator's completeness rule blocks that path in the normal
// submit flow, but direct callers of `assemble` still get the defaults.

use confsmith_api::{ConfigRequest, DirectoryNumber};

use crate::error::CoreError;
use crate::form::FormState;
use crate::policy::PolicyDefaults;
use crate::validate::validate;

/// Fallback address for a filled entry that left the IP blank.
pub const DEFAULT_INTERFACE_IP: &str = "192.168.1.1";

/// Fallback mask for a filled entry that left the mask blank.
pub const DEFAULT_INTERFACE_MASK: &str = "255.255.255.0";

/// Validate the snapshot, then assemble the request.
///
/// This is the submission path: a [`ValidationError`](crate::ValidationError)
/// halts before any request object exists.
pub fn prepare_request(
    form: &FormState,
    policy: &PolicyDefaults,
) -> Result<ConfigRequest, CoreError> {
    validate(form)?;
    Ok(assemble(form, policy))
}

/// Build a [`ConfigRequest`] from the snapshot without validating.
///
/// Filled entries (name plus at least one of ip/mask) are forwarded in
/// registry order; everything else is dropped. All strings are trimmed.
pub fn assemble(form: &FormState, policy: &PolicyDefaults) -> ConfigRequest {
    let mut interfaces = Vec::new();
    let mut networks = Vec::new();
    let mut no_shutdown_interfaces = Vec::new();

    for entry in form.interfaces.list() {
        if !entry.is_filled() {
            continue;
        }
        let name = entry.name.trim();
        let ip = entry.ip.trim();
        let mask = entry.mask.trim();

        interfaces.push(name.to_owned());
        networks.push((
            if ip.is_empty() { DEFAULT_INTERFACE_IP } else { ip }.to_owned(),
            if mask.is_empty() { DEFAULT_INTERFACE_MASK } else { mask }.to_owned(),
        ));
        if entry.no_shutdown {
            no_shutdown_interfaces.push(name.to_owned());
        }
    }

    let dn_list = form
        .telephony
        .directory_numbers
        .iter()
        .map(|dn| DirectoryNumber {
            number: dn.number.trim().to_owned(),
            user: dn.user.trim().to_owned(),
        })
        .collect();

    ConfigRequest {
        routing_protocol: form.routing.protocol.to_string(),
        proto: String::new(),
        router_id: form.routing.router_id.trim().to_owned(),
        ip_multicast: form.routing.multicast,
        telephony_enabled: form.telephony.enabled,
        dn_list,
        enable_ssh: form.security.ssh_enabled,
        hostname: form.security.hostname.trim().to_owned(),
        enable_secret: form.security.enable_secret.trim().to_owned(),
        console_password: form.security.console_password.trim().to_owned(),
        vty_password: form.security.vty_password.trim().to_owned(),
        dhcp_network: form.dhcp.network.trim().to_owned(),
        dhcp_mask: form.dhcp.mask.trim().to_owned(),
        dhcp_gateway: form.dhcp.gateway.trim().to_owned(),
        dhcp_dns: form.dhcp.dns.trim().to_owned(),
        interfaces,
        networks,
        no_shutdown_interfaces,
        max_ephones: policy.max_ephones,
        max_dn: policy.max_dn,
        ip_source_address: policy.ip_source_address.clone(),
        auto_assign_range: policy.auto_assign_range.clone(),
        dhcp_excluded: policy.dhcp_excluded.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{InterfaceDraft, RoutingProtocol};

    fn draft(name: &str, ip: &str, mask: &str, no_shutdown: bool) -> InterfaceDraft {
        InterfaceDraft {
            name: name.into(),
            ip: ip.into(),
            mask: mask.into(),
            no_shutdown,
        }
    }

    /// The three-interface OSPF scenario, end to end.
    #[test]
    fn three_interface_ospf_scenario_assembles_in_order() {
        let mut form = FormState::default();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "192.168.1.1", "255.255.255.0", true))
            .unwrap();
        form.interfaces
            .add(draft("GigabitEthernet0/1", "172.16.0.1", "255.255.0.0", false))
            .unwrap();
        form.interfaces
            .add(draft("GigabitEthernet0/2", "10.0.0.1", "255.255.255.252", true))
            .unwrap();
        form.routing.protocol = RoutingProtocol::Ospf;
        form.routing.router_id = "1.1.1.1".into();

        let request = prepare_request(&form, &PolicyDefaults::default()).unwrap();

        assert_eq!(
            request.interfaces,
            vec![
                "GigabitEthernet0/0",
                "GigabitEthernet0/1",
                "GigabitEthernet0/2"
            ]
        );
        assert_eq!(
            request.networks,
            vec![
                ("192.168.1.1".to_owned(), "255.255.255.0".to_owned()),
                ("172.16.0.1".to_owned(), "255.255.0.0".to_owned()),
                ("10.0.0.1".to_owned(), "255.255.255.252".to_owned()),
            ]
        );
        assert_eq!(
            request.no_shutdown_interfaces,
            vec!["GigabitEthernet0/0", "GigabitEthernet0/2"]
        );
        assert_eq!(request.routing_protocol, "OSPF");
        assert_eq!(request.router_id, "1.1.1.1");
        assert!(!request.telephony_enabled);
        assert!(request.dhcp_network.is_empty());
    }

    #[test]
    fn validation_failure_halts_before_assembly() {
        let form = FormState::default();
        let err = prepare_request(&form, &PolicyDefaults::default()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn missing_ip_and_mask_fall_back_to_defaults() {
        let mut form = FormState::default();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "", "255.255.255.0", false))
            .unwrap();
        form.interfaces
            .add(draft("GigabitEthernet0/1", "172.16.0.1", "", false))
            .unwrap();

        let request = assemble(&form, &PolicyDefaults::default());

        assert_eq!(
            request.networks,
            vec![
                (DEFAULT_INTERFACE_IP.to_owned(), "255.255.255.0".to_owned()),
                ("172.16.0.1".to_owned(), DEFAULT_INTERFACE_MASK.to_owned()),
            ]
        );
    }

    #[test]
    fn unfilled_entries_are_dropped() {
        let mut form = FormState::default();
        form.interfaces.add(InterfaceDraft::default()).unwrap();
        form.interfaces
            .add(draft("", "192.168.1.1", "255.255.255.0", true))
            .unwrap();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "192.168.1.1", "255.255.255.0", true))
            .unwrap();

        let request = assemble(&form, &PolicyDefaults::default());

        assert_eq!(request.interfaces, vec!["GigabitEthernet0/0"]);
        assert_eq!(request.no_shutdown_interfaces, vec!["GigabitEthernet0/0"]);
    }

    #[test]
    fn directory_numbers_pass_through_trimmed() {
        let mut form = FormState::default();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "192.168.1.1", "255.255.255.0", true))
            .unwrap();
        form.telephony.enabled = true;
        form.telephony.directory_numbers[0].number = " 1001 ".into();
        form.telephony.directory_numbers[0].user = "user1".into();
        // Slot 1 left blank on purpose; slot 2 user-only.
        form.telephony.directory_numbers[2].user = "user3".into();

        let request = assemble(&form, &PolicyDefaults::default());

        assert_eq!(request.dn_list.len(), 3);
        assert_eq!(request.dn_list[0].number, "1001");
        assert_eq!(request.dn_list[0].user, "user1");
        assert_eq!(request.dn_list[1], DirectoryNumber::default());
        assert_eq!(request.dn_list[2].user, "user3");
    }

    #[test]
    fn policy_values_are_attached_verbatim() {
        let mut form = FormState::default();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "192.168.1.1", "255.255.255.0", false))
            .unwrap();

        let policy = PolicyDefaults {
            max_ephones: 5,
            max_dn: 5,
            ip_source_address: "10.10.0.1".into(),
            auto_assign_range: "1 to 5".into(),
            dhcp_excluded: ("10.10.0.1".into(), "10.10.0.50".into()),
        };

        let request = assemble(&form, &policy);

        assert_eq!(request.max_ephones, 5);
        assert_eq!(request.max_dn, 5);
        assert_eq!(request.ip_source_address, "10.10.0.1");
        assert_eq!(request.auto_assign_range, "1 to 5");
        assert_eq!(
            request.dhcp_excluded,
            ("10.10.0.1".to_owned(), "10.10.0.50".to_owned())
        );
    }

    #[test]
    fn reserved_proto_field_is_always_empty() {
        let mut form = FormState::default();
        form.interfaces
            .add(draft("GigabitEthernet0/0", "192.168.1.1", "255.255.255.0", false))
            .unwrap();

        let request = assemble(&form, &PolicyDefaults::default());
        assert_eq!(request.proto, "");
    }
}
