use camino::{Utf8Path, Utf8PathBuf};
use compguard_domain::model::{Fact, HostModel, ServiceState, PROBED_SERVICES};
use std::collections::BTreeMap;
use std::process::Command;

const SCANNERS: &[&str] = &["clamscan", "rkhunter", "chkrootkit"];

/// Reads host state under a configurable root.
///
/// The root is `/` in production; tests point it at a synthetic tree.
/// Command probes (`systemctl`, `lsblk`, package managers) always resolve
/// through `PATH`, so tests pin `PATH` to a stub directory instead.
pub struct SystemInspector {
    root: Utf8PathBuf,
}

impl SystemInspector {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_optional(&self, rel: &str) -> Fact<Option<String>> {
        let path = self.root.join(rel);
        match std::fs::read_to_string(&path) {
            Ok(text) => Fact::Known(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Fact::Known(None),
            Err(e) => Fact::error(format!("read {path}: {e}")),
        }
    }

    fn hostname(&self) -> String {
        let from_file = match self.read_optional("etc/hostname") {
            Fact::Known(Some(text)) => Some(text),
            _ => None,
        };
        hostname_from(from_file, std::env::var("HOSTNAME").ok())
    }

    fn service_states(&self) -> Fact<BTreeMap<String, ServiceState>> {
        if !command_on_path("systemctl") {
            return Fact::tool_missing("systemctl");
        }

        let mut states = BTreeMap::new();
        for unit in PROBED_SERVICES {
            let output = match Command::new("systemctl").args(["is-active", unit]).output() {
                Ok(output) => output,
                Err(e) => return Fact::error(format!("spawn systemctl: {e}")),
            };
            // `is-active` reports the state on stdout and exits non-zero for
            // anything but active, so the exit code alone is not an error.
            let stdout = String::from_utf8_lossy(&output.stdout);
            states.insert(
                unit.to_string(),
                parse_unit_state(&stdout, output.status.code()),
            );
        }
        Fact::Known(states)
    }

    fn encrypted_volumes(&self) -> Fact<u32> {
        if !command_on_path("lsblk") {
            return Fact::tool_missing("lsblk");
        }
        match Command::new("lsblk").args(["-rno", "TYPE"]).output() {
            Ok(output) if output.status.success() => {
                Fact::Known(count_crypt_devices(&String::from_utf8_lossy(&output.stdout)))
            }
            Ok(output) => Fact::error(format!("lsblk exited with {}", output.status)),
            Err(e) => Fact::error(format!("spawn lsblk: {e}")),
        }
    }

    fn antivirus_scanner(&self) -> Fact<Option<String>> {
        Fact::Known(
            SCANNERS
                .iter()
                .find(|tool| command_on_path(tool))
                .map(|tool| tool.to_string()),
        )
    }

    fn pending_updates(&self) -> Fact<u32> {
        if command_on_path("apt-get") {
            match Command::new("apt-get").args(["-s", "-q", "upgrade"]).output() {
                Ok(output) if output.status.success() => Fact::Known(count_apt_upgrades(
                    &String::from_utf8_lossy(&output.stdout),
                )),
                Ok(output) => Fact::error(format!("apt-get -s upgrade exited with {}", output.status)),
                Err(e) => Fact::error(format!("spawn apt-get: {e}")),
            }
        } else if command_on_path("dnf") {
            match Command::new("dnf").args(["-q", "check-update"]).output() {
                // dnf uses exit code 100 to signal "updates available".
                Ok(output) => match output.status.code() {
                    Some(0) => Fact::Known(0),
                    Some(100) => {
                        Fact::Known(count_dnf_updates(&String::from_utf8_lossy(&output.stdout)))
                    }
                    _ => Fact::error(format!("dnf check-update exited with {}", output.status)),
                },
                Err(e) => Fact::error(format!("spawn dnf: {e}")),
            }
        } else {
            Fact::tool_missing("apt-get/dnf")
        }
    }
}

/// Probe the host once and return the fact model for the battery.
pub fn build_host_model(root: &Utf8Path) -> HostModel {
    let probe = SystemInspector::new(root);
    HostModel {
        hostname: probe.hostname(),
        login_defs: probe.read_optional("etc/login.defs"),
        sshd_config: probe.read_optional("etc/ssh/sshd_config"),
        exports: probe.read_optional("etc/exports"),
        services: probe.service_states(),
        encrypted_volumes: probe.encrypted_volumes(),
        antivirus_scanner: probe.antivirus_scanner(),
        pending_updates: probe.pending_updates(),
    }
}

fn command_on_path(name: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| dir.join(name).is_file())
}

fn hostname_from(file: Option<String>, env: Option<String>) -> String {
    file.map(|t| t.trim().to_string())
        .filter(|h| !h.is_empty())
        .or(env)
        .unwrap_or_else(|| "unknown-host".to_string())
}

fn parse_unit_state(stdout: &str, exit_code: Option<i32>) -> ServiceState {
    match stdout.trim() {
        "active" => ServiceState::Active,
        "unknown" | "not-found" => ServiceState::NotFound,
        // systemd reports unknown units as inactive with exit code 4.
        _ if exit_code == Some(4) => ServiceState::NotFound,
        _ => ServiceState::Inactive,
    }
}

fn count_crypt_devices(stdout: &str) -> u32 {
    stdout.lines().filter(|line| line.trim() == "crypt").count() as u32
}

fn count_apt_upgrades(stdout: &str) -> u32 {
    stdout
        .lines()
        .filter(|line| line.starts_with("Inst "))
        .count() as u32
}

fn count_dnf_updates(stdout: &str) -> u32 {
    stdout
        .lines()
        .filter(|line| {
            let line = line.trim();
            !line.is_empty()
                && !line.starts_with("Obsoleting")
                && line.split_whitespace().count() >= 3
        })
        .count() as u32
}
