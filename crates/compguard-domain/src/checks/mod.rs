use crate::model::HostModel;
use crate::policy::CheckPolicy;
use compguard_types::CheckResult;
use thiserror::Error;

mod antivirus;
mod audit_daemon;
mod disk_encryption;
mod firewall;
mod nfs_exports;
mod os_updates;
mod password_policy;
mod remote_access;
mod utils;


#[derive(Debug, Error)]
pub enum CheckError {
    #[error("malformed value for {directive}: {value:?}")]
    MalformedValue { directive: String, value: String },
}

/// One compliance area.
///
/// A logical check may emit several named sub-results. Checks are read-only:
/// they see the probed fact model and the effective policy, nothing else.
/// The executor owns the failure boundary; an `Err` here becomes a single
/// FAIL result and the battery continues.
pub trait Check {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError>;
}

/// The battery, in the order results are produced and reported.
pub fn registry() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(password_policy::PasswordPolicy),
        Box::new(remote_access::RemoteAccess),
        Box::new(firewall::Firewall),
        Box::new(audit_daemon::AuditDaemon),
        Box::new(disk_encryption::DiskEncryption),
        Box::new(antivirus::Antivirus),
        Box::new(os_updates::OsUpdates),
        Box::new(nfs_exports::NfsExports),
    ]
}
