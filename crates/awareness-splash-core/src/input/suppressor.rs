use crate::CoreResult;

use tracing::{debug, info, instrument, warn};

/// Process-wide low-level keyboard interception provided by the platform.
///
/// The registered callback must apply
/// [`classify_key_event`](crate::classify_key_event) and nothing else.
pub trait KeyboardHookBackend {
    /// Register the hook callback.
    fn register(&mut self) -> CoreResult<()>;

    /// Remove the hook callback.
    fn unregister(&mut self) -> CoreResult<()>;
}

/// Owns the global keyboard hook for the lifetime of a session.
///
/// Installing twice is a no-op, uninstalling is safe at any time, and the
/// hook is removed when the suppressor is dropped so it never outlives its
/// owner on any exit path that unwinds.
pub struct GlobalInputSuppressor<B: KeyboardHookBackend> {
    backend: B,
    installed: bool,
}

impl<B: KeyboardHookBackend> GlobalInputSuppressor<B> {
    /// Wrap a backend without installing anything.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            installed: false,
        }
    }

    /// Register the hook if it is not already registered.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure; the suppressor stays uninstalled.
    #[instrument(skip(self))]
    pub fn install(&mut self) -> CoreResult<()> {
        if self.installed {
            debug!("Keyboard hook already installed");
            return Ok(());
        }

        self.backend.register()?;
        self.installed = true;
        info!("Keyboard hook installed");

        Ok(())
    }

    /// Remove the hook. No-op when not installed.
    ///
    /// The suppressor counts as uninstalled afterwards even if the backend
    /// reported an error.
    #[instrument(skip(self))]
    pub fn uninstall(&mut self) -> CoreResult<()> {
        if !self.installed {
            return Ok(());
        }

        self.installed = false;
        self.backend.unregister()?;
        info!("Keyboard hook uninstalled");

        Ok(())
    }

    /// Whether the hook is currently registered.
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

impl<B: KeyboardHookBackend> Drop for GlobalInputSuppressor<B> {
    fn drop(&mut self) {
        if let Err(e) = self.uninstall() {
            warn!(error = ?e, "Failed to uninstall keyboard hook on drop");
        }
    }
}
