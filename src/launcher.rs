// File browser launcher: an ordered fallback chain over independent OS
// strategies. The first strategy to succeed wins; a strategy that is
// unavailable or errors never blocks the ones after it; only exhaustion of
// the whole chain is reported to the caller.

use std::sync::Arc;

use crate::config::LauncherConfig;
use crate::platform::{IntentHost, ViewRequest};

// ============ Strategy identifiers ============

pub const STRATEGY_DOWNLOADS_DOCUMENTS: &str = "downloads-documents";
pub const STRATEGY_DOWNLOADS_PATH: &str = "downloads-path";
pub const STRATEGY_FILE_MANAGER_APP: &str = "file-manager-app";
pub const STRATEGY_CONTENT_PICKER: &str = "content-picker";

// ============ Well-known request targets ============

const DOWNLOADS_DOCUMENT_URI: &str =
    "content://com.android.externalstorage.documents/document/primary%3ADownload";
const DOWNLOADS_DIR_URI: &str = "file:///storage/emulated/0/Download";
const MIME_FOLDER: &str = "resource/folder";
const MIME_ANY: &str = "*/*";
const CATEGORY_OPENABLE: &str = "android.intent.category.OPENABLE";
const CHOOSER_TITLE: &str = "Open File Manager";

/// Terminal outcome of one `launch()` invocation. Exactly one is produced
/// per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success {
        strategy: &'static str,
        message: String,
    },
    Exhausted {
        attempted: Vec<&'static str>,
    },
}

/// One strategy attempt: `Ok(Some(message))` = success, `Ok(None)` =
/// unavailable on this device, `Err` = issuing the action failed. The last
/// two are treated identically by the chain.
type Attempt = Result<Option<String>, String>;

pub struct FileBrowserLauncher {
    host: Arc<dyn IntentHost>,
    file_manager_packages: Vec<String>,
}

impl FileBrowserLauncher {
    pub fn new(host: Arc<dyn IntentHost>, config: LauncherConfig) -> Self {
        Self {
            host,
            file_manager_packages: config.file_manager_packages,
        }
    }

    /// Try the strategies in declared order and short-circuit on the first
    /// success. Each attempt runs inside its own fail-soft boundary; no
    /// strategy is retried within an invocation.
    pub fn launch(&self) -> LaunchOutcome {
        let strategies: [(&'static str, Box<dyn Fn() -> Attempt + '_>); 4] = [
            (
                STRATEGY_DOWNLOADS_DOCUMENTS,
                Box::new(|| self.try_downloads_documents()),
            ),
            (
                STRATEGY_DOWNLOADS_PATH,
                Box::new(|| self.try_downloads_path()),
            ),
            (
                STRATEGY_FILE_MANAGER_APP,
                Box::new(|| self.try_known_managers()),
            ),
            (
                STRATEGY_CONTENT_PICKER,
                Box::new(|| self.try_content_picker()),
            ),
        ];

        let mut attempted = Vec::with_capacity(strategies.len());
        for (id, attempt) in strategies {
            attempted.push(id);
            match attempt() {
                Ok(Some(message)) => {
                    log::info!("[Launcher] {} succeeded: {}", id, message);
                    return LaunchOutcome::Success {
                        strategy: id,
                        message,
                    };
                }
                Ok(None) => log::debug!("[Launcher] {} unavailable, trying next", id),
                Err(e) => log::warn!("[Launcher] {} failed: {}, trying next", id, e),
            }
        }

        log::warn!("[Launcher] All strategies exhausted: {:?}", attempted);
        LaunchOutcome::Exhausted { attempted }
    }

    // ============ Individual strategies ============

    /// Strategy 1: folder view of the Downloads tree through the system
    /// document provider.
    fn try_downloads_documents(&self) -> Attempt {
        let request = ViewRequest::view(DOWNLOADS_DOCUMENT_URI, MIME_FOLDER)
            .with_category(CATEGORY_OPENABLE);
        self.try_view(&request, "Downloads folder opened")
    }

    /// Strategy 2: generic file-manager view of the on-disk Downloads path.
    fn try_downloads_path(&self) -> Attempt {
        let request = ViewRequest::view(DOWNLOADS_DIR_URI, MIME_ANY);
        self.try_view(&request, "File manager opened with Downloads")
    }

    fn try_view(&self, request: &ViewRequest, message: &str) -> Attempt {
        if !self.host.can_resolve(request) {
            return Ok(None);
        }
        self.host.issue(request)?;
        Ok(Some(message.to_string()))
    }

    /// Strategy 3: launch a known file-manager application directly. A
    /// package the OS cannot launch advances to the next package, not to
    /// the next strategy.
    fn try_known_managers(&self) -> Attempt {
        for package in &self.file_manager_packages {
            match self.host.launch_package(package) {
                Ok(true) => {
                    return Ok(Some(format!("File manager app opened: {}", package)));
                }
                Ok(false) => log::debug!("[Launcher] {} has no launch action", package),
                Err(e) => log::debug!("[Launcher] {} launch failed: {}", package, e),
            }
        }
        Ok(None)
    }

    /// Strategy 4: generic content picker behind a chooser. Treated as
    /// always available; the only failure mode is issuance itself.
    fn try_content_picker(&self) -> Attempt {
        let request = ViewRequest::get_content(MIME_ANY)
            .with_category(CATEGORY_OPENABLE)
            .with_chooser(CHOOSER_TITLE);
        self.host.issue(&request)?;
        Ok(Some("Generic file picker opened".to_string()))
    }
}

// ============ Tests ============
