use anyhow::Context;
use camino::Utf8Path;

/// Write an artifact, creating intermediate directories as needed.
///
/// A failed write is surfaced with its cause; callers treat it as fatal.
pub fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {parent}"))?;
        }
    }
    std::fs::write(path, data).with_context(|| format!("write artifact: {path}"))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}
