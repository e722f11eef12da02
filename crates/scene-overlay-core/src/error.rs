//! Error types for scene-overlay.

use thiserror::Error;

/// The main error type for scene-overlay operations.
///
/// None of these ever cross back into the host render loop: the injector
/// turns them into log diagnostics and carries on.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The overlay was injected into an interactor a second time.
    #[error("overlay already injected - inject must be called only once")]
    AlreadyInjected,

    /// Another UI context is still alive on this thread.
    #[error("a UI context is already live on this thread")]
    ContextAlreadyLive,

    /// The interactor has no render window attached.
    #[error("interactor has no render window")]
    NoRenderWindow,

    /// The UI graphics backend failed to initialize.
    #[error("graphics backend init error: {0}")]
    BackendInit(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for scene-overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
