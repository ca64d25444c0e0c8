// Fallback platform implementation for non-Android systems.
// Provides safe defaults and graceful degradation: nothing resolves, and
// every issuance reports a clear error instead of pretending to work.

use super::types::*;

#[derive(Default)]
pub struct UnsupportedBridge;

impl IntentHost for UnsupportedBridge {
    fn can_resolve(&self, _request: &ViewRequest) -> bool {
        false
    }

    fn issue(&self, _request: &ViewRequest) -> Result<(), String> {
        Err("Intent issuance is not supported on this platform".to_string())
    }

    fn launch_package(&self, _package: &str) -> Result<bool, String> {
        // No package launch actions exist off-device.
        Ok(false)
    }
}

impl MediaIndex for UnsupportedBridge {
    fn request_scan(&self, _path: &str, _done: ScanCompletion) -> Result<(), String> {
        Err("Media index scanning is not supported on this platform".to_string())
    }
}
