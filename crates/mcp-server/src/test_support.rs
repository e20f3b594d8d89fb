use std::path::{Path, PathBuf};

/// Serializes tests that spawn child processes.
///
/// Writing an executable script while another test thread forks can make the later exec
/// fail with ETXTBSY, so every process-spawning unit test holds this lock.
pub(crate) static SPAWN_MUTEX: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Write an executable `/bin/sh` script standing in for an external tool.
#[cfg(unix)]
pub(crate) fn write_fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool");
    let mut perms = std::fs::metadata(&path).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod fake tool");
    path
}

/// Script prelude answering the discovery probe.
#[cfg(unix)]
pub(crate) const VERSION_PROBE: &str = "if [ \"$1\" = \"--version\" ]; then echo fake 1.0; exit 0; fi";
