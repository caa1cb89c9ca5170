use crate::mci_video::{
    alias_for, close_command, mute_command, open_command, place_command, play_command,
    stop_command,
};

use std::path::Path;

use awareness_splash_core::Rect;

/// WHAT: Each display gets its own MCI alias
/// WHY: MCI aliases are process-global; two surfaces must not share one
#[test]
fn given_display_indices_when_aliasing_then_unique() {
    assert_ne!(alias_for(0), alias_for(1));
}

/// WHAT: The open command quotes the path and parents the video to the surface
/// WHY: Paths with spaces must open, and the video must live inside the window
#[test]
fn given_path_with_spaces_when_building_open_command_then_quoted_child() {
    let command = open_command("splash_video_0", Path::new(r"C:\awareness\intro clip.mp4"), 4242);

    assert_eq!(
        command,
        r#"open "C:\awareness\intro clip.mp4" type mpegvideo alias splash_video_0 parent 4242 style child"#
    );
}

/// WHAT: Placement, mute, loop and teardown commands target the alias
/// WHY: Every command must address the device opened for that surface
#[test]
fn given_alias_when_building_commands_then_alias_targeted() {
    let rect = Rect {
        x: 640,
        y: 360,
        width: 640,
        height: 360,
    };

    assert_eq!(place_command("v", rect), "put v window at 640 360 640 360");
    assert_eq!(mute_command("v"), "setaudio v off");
    assert_eq!(play_command("v"), "play v repeat");
    assert_eq!(stop_command("v"), "stop v");
    assert_eq!(close_command("v"), "close v");
}
