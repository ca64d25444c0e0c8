// Platform abstraction types — used by all platform implementations and by
// the launcher/scanner components. The traits take `&self` and stay
// object-safe so tests can substitute recording stubs.

/// Action verb of an OS-level "open" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentAction {
    /// Display the data to the user (android.intent.action.VIEW).
    View,
    /// Let the user select a piece of openable content
    /// (android.intent.action.GET_CONTENT).
    GetContent,
}

impl IntentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentAction::View => "android.intent.action.VIEW",
            IntentAction::GetContent => "android.intent.action.GET_CONTENT",
        }
    }
}

/// Descriptor of an OS-level "open" action. Built once per strategy
/// attempt, never mutated after construction.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub action: IntentAction,
    /// Target URI; `None` for picker-style requests without a target.
    pub data: Option<String>,
    /// MIME or resource type hint.
    pub mime: Option<String>,
    /// Intent categories (e.g. android.intent.category.OPENABLE).
    pub categories: Vec<String>,
    /// Launch in a new task, detached from the issuing activity.
    pub new_task: bool,
    /// Wrap the request in a user-facing chooser with this title.
    pub chooser_title: Option<String>,
}

impl ViewRequest {
    pub fn view(data: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            action: IntentAction::View,
            data: Some(data.into()),
            mime: Some(mime.into()),
            categories: Vec::new(),
            new_task: true,
            chooser_title: None,
        }
    }

    pub fn get_content(mime: impl Into<String>) -> Self {
        Self {
            action: IntentAction::GetContent,
            data: None,
            mime: Some(mime.into()),
            categories: Vec::new(),
            new_task: true,
            chooser_title: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_chooser(mut self, title: impl Into<String>) -> Self {
        self.chooser_title = Some(title.into());
        self
    }
}

/// Trait for issuing "open" actions against the OS.
///
/// `can_resolve` is a pure query: it must not present anything to the user.
/// `issue` fires the action; the OS takes over from there.
pub trait IntentHost: Send + Sync {
    /// Ask the OS whether any installed handler can satisfy the request.
    /// Query failures count as "cannot resolve".
    fn can_resolve(&self, request: &ViewRequest) -> bool;

    /// Fire the request. Fire-and-forget: success means the OS accepted
    /// it, not that the user saw anything in particular.
    fn issue(&self, request: &ViewRequest) -> Result<(), String>;

    /// Launch an application by package identifier. Returns `Ok(false)`
    /// when the OS has no launch action for that package.
    fn launch_package(&self, package: &str) -> Result<bool, String>;
}

/// One-shot completion for a media scan. Invoked with the indexed path,
/// on a thread the caller does not control, at most once.
pub type ScanCompletion = Box<dyn FnOnce(String) + Send + 'static>;

/// Trait for the OS media-indexing facility.
pub trait MediaIndex: Send + Sync {
    /// Request an out-of-process (re)scan of `path`. The scan result is
    /// delivered solely through `done`; there is no synchronous result.
    fn request_scan(&self, path: &str, done: ScanCompletion) -> Result<(), String>;
}
