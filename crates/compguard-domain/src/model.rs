use std::collections::BTreeMap;

/// Systemd units the probe queries for the battery.
pub const PROBED_SERVICES: &[&str] = &["firewalld", "ufw", "nftables", "auditd"];

/// One fact gathered by the host probe.
///
/// Probing never aborts a run: a missing inspection tool or a failed probe
/// is itself a fact, and checks map those states to WARN and FAIL results
/// at their own boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fact<T> {
    /// The probe inspected the host and produced a value.
    Known(T),
    /// The inspection tool needed to produce this fact is not installed.
    ToolMissing { tool: String },
    /// The probe ran and failed.
    Error { detail: String },
}

impl<T> Fact<T> {
    pub fn tool_missing(tool: impl Into<String>) -> Self {
        Fact::ToolMissing { tool: tool.into() }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Fact::Error {
            detail: detail.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Active,
    Inactive,
    NotFound,
}

/// Facts about one host, as seen by a single probe pass.
///
/// File facts carry `None` when the file does not exist; whether absence is
/// acceptable is check semantics, not probe semantics.
#[derive(Clone, Debug)]
pub struct HostModel {
    pub hostname: String,

    /// `etc/login.defs` under the host root.
    pub login_defs: Fact<Option<String>>,
    /// `etc/ssh/sshd_config` under the host root.
    pub sshd_config: Fact<Option<String>>,
    /// `etc/exports` under the host root.
    pub exports: Fact<Option<String>>,

    /// Unit states for [`PROBED_SERVICES`].
    pub services: Fact<BTreeMap<String, ServiceState>>,
    /// Count of `crypt` block devices.
    pub encrypted_volumes: Fact<u32>,
    /// Name of the first malware scanner found on PATH, if any.
    pub antivirus_scanner: Fact<Option<String>>,
    /// Count of pending package updates.
    pub pending_updates: Fact<u32>,
}

impl Default for HostModel {
    fn default() -> Self {
        HostModel {
            hostname: String::new(),
            login_defs: Fact::Known(None),
            sshd_config: Fact::Known(None),
            exports: Fact::Known(None),
            services: Fact::Known(BTreeMap::new()),
            encrypted_volumes: Fact::Known(0),
            antivirus_scanner: Fact::Known(None),
            pending_updates: Fact::Known(0),
        }
    }
}
