// Media scanner: asks the OS media index to pick up a newly written file
// so other applications can discover it. The index works out-of-process
// and reports back through a one-shot completion; the request's logical
// lifetime ends only when that completion fires.

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::error::BridgeError;
use crate::platform::MediaIndex;

pub struct MediaScanner {
    index: Arc<dyn MediaIndex>,
}

impl MediaScanner {
    pub fn new(index: Arc<dyn MediaIndex>) -> Self {
        Self { index }
    }

    /// Request a scan of `path` and wait for the index's completion, which
    /// echoes the (possibly normalized) indexed path.
    ///
    /// An empty path is rejected before the OS is contacted. There is no
    /// timeout: if the index never completes, the request stays pending.
    /// The one observable never-completes case — the completion dropped
    /// without firing — is surfaced as a scan error instead of hanging.
    pub async fn request_scan(&self, path: &str) -> Result<String, BridgeError> {
        if path.trim().is_empty() {
            return Err(BridgeError::InvalidArgument);
        }

        let (tx, rx) = oneshot::channel();
        self.index
            .request_scan(
                path,
                Box::new(move |indexed| {
                    // At most one completion per request; a second send is
                    // impossible by construction.
                    let _ = tx.send(indexed);
                }),
            )
            .map_err(BridgeError::Scan)?;

        match rx.await {
            Ok(indexed) => Ok(indexed),
            Err(_) => Err(BridgeError::Scan(
                "scan completion was dropped before firing".to_string(),
            )),
        }
    }
}

// ============ Tests ============

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScanCompletion;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Index stub that echoes the submitted path back through the
    /// completion, counting invocations.
    #[derive(Default)]
    struct EchoIndex {
        requests: AtomicUsize,
    }

    impl MediaIndex for EchoIndex {
        fn request_scan(&self, path: &str, done: ScanCompletion) -> Result<(), String> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let indexed = path.to_string();
            // Complete from another thread, as the real index does.
            std::thread::spawn(move || done(indexed));
            Ok(())
        }
    }

    struct FailingIndex;

    impl MediaIndex for FailingIndex {
        fn request_scan(&self, _path: &str, _done: ScanCompletion) -> Result<(), String> {
            Err("index service unavailable".to_string())
        }
    }

    /// Accepts the request but drops the completion without firing it.
    struct SilentIndex;

    impl MediaIndex for SilentIndex {
        fn request_scan(&self, _path: &str, _done: ScanCompletion) -> Result<(), String> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_scan_echoes_indexed_path() {
        let scanner = MediaScanner::new(Arc::new(EchoIndex::default()));
        let result = scanner
            .request_scan("/storage/emulated/0/Download/report.pdf")
            .await;
        assert_eq!(
            result.unwrap(),
            "/storage/emulated/0/Download/report.pdf"
        );
    }

    #[tokio::test]
    async fn test_empty_path_rejected_without_touching_index() {
        let index = Arc::new(EchoIndex::default());
        let scanner = MediaScanner::new(index.clone());

        let result = scanner.request_scan("").await;
        assert!(matches!(result, Err(BridgeError::InvalidArgument)));

        let result = scanner.request_scan("   ").await;
        assert!(matches!(result, Err(BridgeError::InvalidArgument)));

        assert_eq!(index.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_issuance_failure_becomes_scan_error() {
        let scanner = MediaScanner::new(Arc::new(FailingIndex));
        let result = scanner.request_scan("/tmp/x.pdf").await;
        match result {
            Err(BridgeError::Scan(msg)) => assert!(msg.contains("index service unavailable")),
            other => panic!("expected scan error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_completion_becomes_scan_error() {
        let scanner = MediaScanner::new(Arc::new(SilentIndex));
        let result = scanner.request_scan("/tmp/x.pdf").await;
        assert!(matches!(result, Err(BridgeError::Scan(_))));
    }

    #[tokio::test]
    async fn test_concurrent_scans_are_independent() {
        let scanner = Arc::new(MediaScanner::new(Arc::new(EchoIndex::default())));

        let a = {
            let scanner = scanner.clone();
            tokio::spawn(async move { scanner.request_scan("/tmp/a.pdf").await })
        };
        let b = {
            let scanner = scanner.clone();
            tokio::spawn(async move { scanner.request_scan("/tmp/b.pdf").await })
        };

        assert_eq!(a.await.unwrap().unwrap(), "/tmp/a.pdf");
        assert_eq!(b.await.unwrap().unwrap(), "/tmp/b.pdf");
    }
}
