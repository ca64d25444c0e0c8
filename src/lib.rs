mod config;
mod error;
mod launcher;
mod media_scan;
mod platform;

use std::sync::Arc;

use tauri::{Manager, State};

use config::LauncherConfig;
use error::BridgeError;
use launcher::{FileBrowserLauncher, LaunchOutcome};
use media_scan::MediaScanner;
use platform::Bridge;

// Type alias for media scanner state
type ScannerState = Arc<MediaScanner>;

// Type alias for file browser launcher state
type LauncherState = Arc<FileBrowserLauncher>;

// ============ Bridge Commands ============

/// Ask the OS media index to (re)scan a file so other applications can
/// discover it. Resolves once the index's completion echoes the path.
#[tauri::command]
async fn scan_file(
    scanner: State<'_, ScannerState>,
    path: String,
) -> Result<String, BridgeError> {
    let indexed = scanner.request_scan(&path).await?;
    Ok(format!("File scanned: {}", indexed))
}

/// Present a file browser to the user via the launcher's fallback chain.
/// Returns the winning strategy's confirmation message.
#[tauri::command]
async fn open_file_manager(
    launcher: State<'_, LauncherState>,
) -> Result<String, BridgeError> {
    let launcher = launcher.inner().clone();

    // Strategy attempts shell out to OS tools; keep them off the async
    // runtime threads. A join failure here is the one failure mode outside
    // the per-strategy boundaries.
    let outcome = tokio::task::spawn_blocking(move || launcher.launch())
        .await
        .map_err(|e| BridgeError::Open(e.to_string()))?;

    match outcome {
        LaunchOutcome::Success { message, .. } => Ok(message),
        LaunchOutcome::Exhausted { attempted } => {
            Err(BridgeError::NoFileManager { attempted })
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let bridge = Arc::new(Bridge::default());

            let config = match app.path().app_config_dir() {
                Ok(dir) => LauncherConfig::load(&dir),
                Err(e) => {
                    log::warn!("[Setup] No app config dir ({}), using default allowlist", e);
                    LauncherConfig::default()
                }
            };

            app.manage::<ScannerState>(Arc::new(MediaScanner::new(bridge.clone())));
            app.manage::<LauncherState>(Arc::new(FileBrowserLauncher::new(bridge, config)));

            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![scan_file, open_file_manager])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
