use crate::layout::SurfaceSize;

/// A physical display as enumerated at session start.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayInfo {
    /// Enumeration order.
    pub index: usize,
    /// Platform name, if any.
    pub name: Option<String>,
    /// Top-left corner on the virtual desktop.
    pub position: (i32, i32),
    /// Full bounds in physical pixels.
    pub size: SurfaceSize,
    /// DPI scale factor (1.0 = 96 DPI).
    pub scale_factor: f64,
}
