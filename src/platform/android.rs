// Android platform implementation.
// Drives the platform shell tools (`pm`, `am`, `cmd package`) for intent
// resolution, issuance and media-index broadcasts.

use std::process::Command;

use super::types::*;

#[derive(Default)]
pub struct AndroidBridge;

// ============ Internal helpers ============

/// Run a platform tool and return its output, mapping spawn failures to a
/// readable error.
fn run_tool(tool: &str, args: &[&str]) -> Result<std::process::Output, String> {
    Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| format!("{} failed to start: {}", tool, e))
}

/// Extract the resolved activity component from `resolve-activity --brief`
/// output. The component is the last non-empty line and contains a `/`
/// separating package from activity; anything else means no handler.
fn parse_resolved_component(stdout: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(stdout);
    let line = text.lines().rev().find(|l| !l.trim().is_empty())?;
    let line = line.trim();
    if line.contains('/') && !line.contains("No activity found") {
        Some(line.to_string())
    } else {
        None
    }
}

/// Assemble the `am start` argument list for a request.
fn start_args(request: &ViewRequest) -> Vec<String> {
    let mut args = vec!["start".to_string(), "-a".to_string(), request.action.as_str().to_string()];
    if let Some(data) = &request.data {
        args.push("-d".to_string());
        args.push(data.clone());
    }
    if let Some(mime) = &request.mime {
        args.push("-t".to_string());
        args.push(mime.clone());
    }
    for category in &request.categories {
        args.push("-c".to_string());
        args.push(category.clone());
    }
    if let Some(title) = &request.chooser_title {
        // `am` surfaces the system disambiguation dialog itself; the title
        // travels as the standard EXTRA_TITLE string extra.
        args.push("-e".to_string());
        args.push("android.intent.extra.TITLE".to_string());
        args.push(title.clone());
    }
    if request.new_task {
        // FLAG_ACTIVITY_NEW_TASK
        args.push("-f".to_string());
        args.push("0x10000000".to_string());
    }
    args
}

/// `am` reports many failures on stdout with exit code 0, so check the
/// transcript as well as the status.
fn check_am_output(output: std::process::Output) -> Result<(), String> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(format!("am exited with {}: {}", output.status, stderr.trim()));
    }
    if stdout.contains("Error:") || stderr.contains("Error:") {
        return Err(format!("am reported an error: {}", stdout.trim()));
    }
    Ok(())
}

// ============ IntentHost implementation ============

impl IntentHost for AndroidBridge {
    fn can_resolve(&self, request: &ViewRequest) -> bool {
        let mut args = vec!["resolve-activity", "--brief", "-a", request.action.as_str()];
        if let Some(data) = &request.data {
            args.push("-d");
            args.push(data);
        }
        if let Some(mime) = &request.mime {
            args.push("-t");
            args.push(mime);
        }
        for category in &request.categories {
            args.push("-c");
            args.push(category);
        }

        match run_tool("pm", &args) {
            Ok(output) if output.status.success() => {
                parse_resolved_component(&output.stdout).is_some()
            }
            Ok(_) => false,
            Err(e) => {
                log::debug!("[Platform] resolve query failed: {}", e);
                false
            }
        }
    }

    fn issue(&self, request: &ViewRequest) -> Result<(), String> {
        let args = start_args(request);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = run_tool("am", &arg_refs)?;
        check_am_output(output)
    }

    fn launch_package(&self, package: &str) -> Result<bool, String> {
        // Two steps: find the launcher component, then start it directly.
        let output = run_tool(
            "cmd",
            &[
                "package",
                "resolve-activity",
                "--brief",
                "-c",
                "android.intent.category.LAUNCHER",
                package,
            ],
        )?;

        let component = match parse_resolved_component(&output.stdout) {
            Some(c) => c,
            None => return Ok(false),
        };

        let output = run_tool("am", &["start", "-n", &component])?;
        check_am_output(output)?;
        Ok(true)
    }
}

// ============ MediaIndex implementation ============

impl MediaIndex for AndroidBridge {
    fn request_scan(&self, path: &str, done: ScanCompletion) -> Result<(), String> {
        let uri = format!("file://{}", path);
        let output = run_tool(
            "am",
            &[
                "broadcast",
                "-a",
                "android.intent.action.MEDIA_SCANNER_SCAN_FILE",
                "-d",
                &uri,
            ],
        )?;
        check_am_output(output)?;

        // The broadcast carries no reply channel; once the index has
        // accepted the request, the completion echoes the submitted path.
        let indexed = path.to_string();
        std::thread::spawn(move || done(indexed));
        Ok(())
    }
}
