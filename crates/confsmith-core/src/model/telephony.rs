// ── Telephony section ──

use confsmith_api::DirectoryNumber;
use serde::{Deserialize, Serialize};

/// Number of directory-number slots. Fixed by the device model, like
/// the interface cap.
pub const DN_SLOTS: usize = 3;

/// Telephony section of the form: an enable switch plus a fixed-size
/// roster of extension slots. Slots are individually optional; blank
/// slots still cross the wire and the generator decides what to do
/// with them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephonyConfig {
    pub enabled: bool,
    pub directory_numbers: [DirectoryNumber; DN_SLOTS],
}

impl TelephonyConfig {
    /// Build from up to [`DN_SLOTS`] entries, padding the tail with
    /// blank slots. Returns `None` when given more entries than slots.
    pub fn with_extensions(enabled: bool, entries: Vec<DirectoryNumber>) -> Option<Self> {
        if entries.len() > DN_SLOTS {
            return None;
        }
        let mut directory_numbers: [DirectoryNumber; DN_SLOTS] =
            std::array::from_fn(|_| DirectoryNumber::default());
        for (slot, entry) in directory_numbers.iter_mut().zip(entries) {
            *slot = entry;
        }
        Some(Self {
            enabled,
            directory_numbers,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn short_rosters_are_padded_with_blank_slots() {
        let cfg = TelephonyConfig::with_extensions(
            true,
            vec![DirectoryNumber {
                number: "1001".into(),
                user: "user1".into(),
            }],
        )
        .unwrap();

        assert_eq!(cfg.directory_numbers.len(), DN_SLOTS);
        assert_eq!(cfg.directory_numbers[0].number, "1001");
        assert!(cfg.directory_numbers[1].number.is_empty());
        assert!(cfg.directory_numbers[2].user.is_empty());
    }

    #[test]
    fn oversized_rosters_are_rejected() {
        let entries = vec![DirectoryNumber::default(); DN_SLOTS + 1];
        assert!(TelephonyConfig::with_extensions(true, entries).is_none());
    }
}
