use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const TIMED_OUT_MESSAGE: &str = "Timed out";

/// How a single external process invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process ran to completion (any exit code).
    Exited,
    /// The process outlived its timeout and was killed.
    TimedOut,
    /// The executable could not be located or started.
    NotFound,
}

/// Captured result of one external process invocation.
///
/// `exit_code` is `-1` whenever the process could not be run or timed out; the streams are
/// empty strings (never absent) on those paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub outcome: RunOutcome,
}

impl CommandResult {
    fn timed_out() -> Self {
        Self {
            exit_code: -1,
            stdout: String::new(),
            stderr: TIMED_OUT_MESSAGE.to_string(),
            outcome: RunOutcome::TimedOut,
        }
    }

    fn not_found(program: &str) -> Self {
        Self {
            exit_code: -1,
            stdout: String::new(),
            stderr: format!("Not found: {program}"),
            outcome: RunOutcome::NotFound,
        }
    }

    /// The child started but its output could not be collected.
    fn collect_failed(program: &str, err: &std::io::Error) -> Self {
        Self {
            exit_code: -1,
            stdout: String::new(),
            stderr: format!("Failed to collect output of {program}: {err}"),
            outcome: RunOutcome::Exited,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome == RunOutcome::Exited && self.exit_code == 0
    }

    /// True when the executable could not be started at all.
    pub fn is_not_found(&self) -> bool {
        self.outcome == RunOutcome::NotFound
    }
}

/// Run `command` (program followed by its arguments, no shell) and capture its output.
///
/// The child is killed if it does not finish within `timeout`. Stdin is always the null
/// device: the server's own stdio carries the MCP stream.
pub async fn run_command(
    command: &[String],
    working_dir: Option<&Path>,
    timeout: Duration,
) -> CommandResult {
    let Some((program, args)) = command.split_first() else {
        return CommandResult::not_found("");
    };

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    log::debug!("spawn: {}", command.join(" "));
    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            log::debug!("failed to start {program}: {err}");
            return CommandResult::not_found(program);
        }
    };

    // Dropping the pending future on timeout drops the child, which kills it.
    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => CommandResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            outcome: RunOutcome::Exited,
        },
        Ok(Err(err)) => {
            log::debug!("failed to collect output of {program}: {err}");
            CommandResult::collect_failed(program, &err)
        }
        Err(_) => {
            log::debug!("{program} timed out after {}s", timeout.as_secs_f32());
            CommandResult::timed_out()
        }
    }
}
