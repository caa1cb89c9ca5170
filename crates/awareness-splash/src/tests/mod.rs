mod config;
mod keyboard_hook;
mod mci_video;
