mod display;
mod session;
mod settings;

pub use {
    display::DisplayInfo,
    session::{EXIT_CODE_EXPIRED, SessionCoordinator, SessionStatus},
    settings::SessionSettings,
};
