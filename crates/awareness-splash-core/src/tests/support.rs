//! Recording test doubles for the platform traits.

use crate::{
    AudioDeviceResolver, CoreResult, DisplayInfo, KeyboardHookBackend, Rect, Scene, SplashError,
    SurfaceHost, SurfaceSize, VolumeEndpoint,
};

use std::{
    cell::RefCell,
    panic::Location,
    path::{Path, PathBuf},
    rc::Rc,
};

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};

/// Ordered record of side effects shared by several fakes.
pub(crate) type Journal = Rc<RefCell<Vec<&'static str>>>;

fn note(journal: &Option<Journal>, entry: &'static str) {
    if let Some(journal) = journal {
        journal.borrow_mut().push(entry);
    }
}

#[derive(Debug, Default)]
pub(crate) struct HostLog {
    pub presents: usize,
    pub timer_texts: Vec<String>,
    pub last_background: Option<PathBuf>,
    pub last_video_rect: Option<Rect>,
    pub video_starts: Vec<(PathBuf, Rect, bool)>,
    pub video_moves: Vec<Rect>,
    pub video_stops: usize,
    pub closed: bool,
}

pub(crate) struct RecordingHost {
    pub size: SurfaceSize,
    pub log: Rc<RefCell<HostLog>>,
    pub fail_present: bool,
    pub fail_video: bool,
    pub journal: Option<Journal>,
}

impl RecordingHost {
    pub fn new(size: SurfaceSize) -> (Self, Rc<RefCell<HostLog>>) {
        let log = Rc::new(RefCell::new(HostLog::default()));
        (
            Self {
                size,
                log: Rc::clone(&log),
                fail_present: false,
                fail_video: false,
                journal: None,
            },
            log,
        )
    }
}

impl SurfaceHost for RecordingHost {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    #[track_caller]
    fn present(&mut self, scene: &Scene<'_>) -> CoreResult<()> {
        if self.fail_present {
            return Err(SplashError::RenderFailed {
                reason: "test failure".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let mut log = self.log.borrow_mut();
        log.presents += 1;
        log.timer_texts.push(scene.timer.text.to_string());
        log.last_background = scene
            .background
            .map(|(image, _)| image.path().to_path_buf());
        log.last_video_rect = scene.video_rect;
        Ok(())
    }

    #[track_caller]
    fn start_video(&mut self, path: &Path, rect: Rect, muted: bool) -> CoreResult<()> {
        if self.fail_video {
            return Err(SplashError::VideoFailed {
                reason: "decoder unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.log
            .borrow_mut()
            .video_starts
            .push((path.to_path_buf(), rect, muted));
        Ok(())
    }

    fn place_video(&mut self, rect: Rect) -> CoreResult<()> {
        self.log.borrow_mut().video_moves.push(rect);
        Ok(())
    }

    fn stop_video(&mut self) -> CoreResult<()> {
        note(&self.journal, "video_stopped");
        self.log.borrow_mut().video_stops += 1;
        Ok(())
    }
}

impl Drop for RecordingHost {
    fn drop(&mut self) {
        note(&self.journal, "surface_closed");
        self.log.borrow_mut().closed = true;
    }
}

#[derive(Debug, Default)]
pub(crate) struct HookLog {
    pub registers: usize,
    pub unregisters: usize,
}

pub(crate) struct FakeHookBackend {
    pub log: Rc<RefCell<HookLog>>,
    pub fail_register: bool,
    pub journal: Option<Journal>,
}

impl FakeHookBackend {
    pub fn new() -> (Self, Rc<RefCell<HookLog>>) {
        let log = Rc::new(RefCell::new(HookLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                fail_register: false,
                journal: None,
            },
            log,
        )
    }
}

impl KeyboardHookBackend for FakeHookBackend {
    #[track_caller]
    fn register(&mut self) -> CoreResult<()> {
        if self.fail_register {
            return Err(SplashError::InputHookFailed {
                reason: "access denied".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        note(&self.journal, "hook_installed");
        self.log.borrow_mut().registers += 1;
        Ok(())
    }

    fn unregister(&mut self) -> CoreResult<()> {
        note(&self.journal, "hook_removed");
        self.log.borrow_mut().unregisters += 1;
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct VolumeLog {
    pub resolves: usize,
    pub level: f32,
    pub sets: Vec<f32>,
}

pub(crate) struct FakeResolver {
    pub log: Rc<RefCell<VolumeLog>>,
    pub available: bool,
    pub journal: Option<Journal>,
}

impl FakeResolver {
    pub fn new(initial_level: f32) -> (Self, Rc<RefCell<VolumeLog>>) {
        let log = Rc::new(RefCell::new(VolumeLog {
            resolves: 0,
            level: initial_level,
            sets: Vec::new(),
        }));
        (
            Self {
                log: Rc::clone(&log),
                available: true,
                journal: None,
            },
            log,
        )
    }
}

pub(crate) struct FakeEndpoint {
    log: Rc<RefCell<VolumeLog>>,
    journal: Option<Journal>,
}

impl VolumeEndpoint for FakeEndpoint {
    fn scalar(&self) -> CoreResult<f32> {
        Ok(self.log.borrow().level)
    }

    fn set_scalar(&self, level: f32) -> CoreResult<()> {
        note(&self.journal, "volume_set");
        let mut log = self.log.borrow_mut();
        log.level = level;
        log.sets.push(level);
        Ok(())
    }
}

impl AudioDeviceResolver for FakeResolver {
    type Endpoint = FakeEndpoint;

    #[track_caller]
    fn resolve_default(&mut self) -> CoreResult<FakeEndpoint> {
        self.log.borrow_mut().resolves += 1;
        if !self.available {
            return Err(SplashError::VolumeDeviceUnavailable {
                reason: "no render endpoint".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(FakeEndpoint {
            log: Rc::clone(&self.log),
            journal: self.journal.clone(),
        })
    }
}

pub(crate) const FULL_HD: SurfaceSize = SurfaceSize {
    width: 1920,
    height: 1080,
};

pub(crate) fn display(index: usize) -> DisplayInfo {
    DisplayInfo {
        index,
        name: Some(format!("DISPLAY{}", index + 1)),
        position: (index as i32 * 1920, 0),
        size: FULL_HD,
        scale_factor: 1.0,
    }
}

/// Write a small solid PNG and return its path.
#[allow(clippy::unwrap_used)]
pub(crate) fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();
    path
}
