/// Local input a surface window received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceInput {
    /// Pointer button went down.
    PointerPress,
    /// Pointer button released (completed click).
    PointerClick,
    /// Double click.
    PointerDoubleClick,
    /// The window manager asked the window to close.
    CloseRequested,
    /// Alt+F4 or the platform's equivalent close shortcut.
    CloseShortcut,
}

/// What the window should do with a [`SurfaceInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// Swallow the input; the session is still running.
    Discard,
    /// Let normal handling (including closing) proceed.
    Proceed,
}
