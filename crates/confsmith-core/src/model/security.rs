// ── Security section ──

use serde::{Deserialize, Serialize};

/// Security section of the form. Every password field is either empty
/// (the corresponding lines are omitted from the generated config) or
/// must satisfy the password policy enforced in `validate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub hostname: String,
    pub enable_secret: String,
    pub console_password: String,
    pub vty_password: String,
    pub ssh_enabled: bool,
}
