//! Stable identifiers for checks and result codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case
//! discriminator carried in the result `data` payload.

// Checks, in battery order
pub const CHECK_PASSWORD_POLICY: &str = "host.password_policy";
pub const CHECK_REMOTE_ACCESS: &str = "host.remote_access";
pub const CHECK_FIREWALL: &str = "host.firewall";
pub const CHECK_AUDIT_DAEMON: &str = "host.audit_daemon";
pub const CHECK_DISK_ENCRYPTION: &str = "host.disk_encryption";
pub const CHECK_ANTIVIRUS: &str = "host.antivirus";
pub const CHECK_OS_UPDATES: &str = "host.os_updates";
pub const CHECK_NFS_EXPORTS: &str = "host.nfs_exports";

// Codes: host.password_policy
pub const CODE_MAX_AGE: &str = "password_max_age";
pub const CODE_MIN_LEN: &str = "password_min_length";
pub const CODE_MIN_AGE: &str = "password_min_age";

// Codes: host.remote_access
pub const CODE_ROOT_LOGIN: &str = "ssh_root_login";
pub const CODE_PASSWORD_AUTH: &str = "ssh_password_auth";

// Cross-check codes
pub const CODE_TOOL_MISSING: &str = "tool_missing";
pub const CODE_UNVERIFIABLE: &str = "unverifiable";
pub const CODE_PROBE_ERROR: &str = "probe_error";
pub const CODE_CHECK_ERROR: &str = "check_error";
