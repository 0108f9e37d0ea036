//! Child-process helper shared by command-backed tools.

use crate::capability::ports::{CapabilityInvocationError, CapabilityInvocationResult};
use std::process::{Output, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Runs `program` with `args`, optionally feeding `stdin`, and captures output.
///
/// A non-zero exit status is not an error here; callers decide how to report
/// it.
pub(super) async fn run(
    program: &str,
    args: &[&str],
    stdin: Option<&str>,
) -> CapabilityInvocationResult<Output> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .map_err(CapabilityInvocationError::runtime)?;

    if let Some(input) = stdin
        && let Some(mut pipe) = child.stdin.take()
    {
        pipe.write_all(input.as_bytes())
            .await
            .map_err(CapabilityInvocationError::runtime)?;
        pipe.shutdown()
            .await
            .map_err(CapabilityInvocationError::runtime)?;
    }

    child
        .wait_with_output()
        .await
        .map_err(CapabilityInvocationError::runtime)
}

/// Renders a command line for error messages.
pub(super) fn describe(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
