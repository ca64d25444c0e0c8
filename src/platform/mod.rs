// Platform abstraction layer — selects the correct implementation based on
// target OS.
//
// The platform module implements `IntentHost` and `MediaIndex` from
// `types.rs`. The rest of the codebase uses `Bridge` (the type alias) to
// reach the platform-specific code without any `#[cfg]` scattered around.

pub mod types;

// Compiled under test on every platform; it only shells out at runtime.
#[cfg(any(target_os = "android", test))]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod fallback;

// Re-export the traits and types for convenience
pub use types::*;

// Type alias: the platform implementation selected at compile time
#[cfg(target_os = "android")]
pub type Bridge = android::AndroidBridge;

#[cfg(not(target_os = "android"))]
pub type Bridge = fallback::UnsupportedBridge;
