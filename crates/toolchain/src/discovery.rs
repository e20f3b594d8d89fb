use crate::runner::run_command;
use std::time::Duration;

/// Return the first candidate that answers `--version` successfully, or an empty string.
///
/// Candidates are probed strictly in order; each probe is a separate child process bounded
/// by `probe_timeout`.
pub async fn find_executable<S: AsRef<str>>(candidates: &[S], probe_timeout: Duration) -> String {
    for candidate in candidates {
        let name = candidate.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        let probe = run_command(
            &[name.to_string(), "--version".to_string()],
            None,
            probe_timeout,
        )
        .await;
        if probe.success() {
            log::debug!("discovered {name}");
            return name.to_string();
        }
        log::debug!("candidate {name} unavailable: {}", probe.stderr.trim());
    }
    String::new()
}
