use super::*;

#[test]
fn test_deck_standard_layout() {
    let capture = DeviceLayout::SteamDeck
        .locate(Path::new("612880/screenshots/20240721231538_1.jpg"))
        .unwrap();
    assert_eq!(capture.game_id, GameId(612880));
    assert_eq!(capture.outer_dir, PathBuf::new());
    assert_eq!(capture.inner_dir, PathBuf::new());
    assert_eq!(capture.file_name, "20240721231538_1.jpg");

    let folder = GameFolder::new("Test Game", 2020);
    let dest = capture.destination(Path::new("/out"), &folder, "2024-07-21 at 23-15-38.jpg");
    assert_eq!(
        dest,
        PathBuf::from("/out/Test Game (2020)/2024-07-21 at 23-15-38.jpg")
    );
}

#[test]
fn test_deck_keeps_deeper_structure() {
    let capture = DeviceLayout::SteamDeck
        .locate(Path::new("42/screenshots/extra/deep/a.png"))
        .unwrap();
    assert_eq!(capture.inner_dir, PathBuf::from("extra/deep"));

    let capture = DeviceLayout::SteamDeck
        .locate(Path::new("42/other/a.png"))
        .unwrap();
    assert_eq!(capture.inner_dir, PathBuf::from("other"));
}

#[test]
fn test_deck_file_in_game_folder_root() {
    let capture = DeviceLayout::SteamDeck.locate(Path::new("42/a.png")).unwrap();
    assert_eq!(capture.game_id, GameId(42));
    assert_eq!(capture.inner_dir, PathBuf::new());
}

#[test]
fn test_deck_skips() {
    assert_eq!(
        DeviceLayout::SteamDeck.locate(Path::new("loose.png")),
        Err(SkipReason::NoGameFolder)
    );
    assert_eq!(
        DeviceLayout::SteamDeck.locate(Path::new("misc/a.png")),
        Err(SkipReason::NotAGameId("misc".to_string()))
    );
}

#[test]
fn test_pc_flat_layout() {
    let capture = DeviceLayout::GamingPc
        .locate(Path::new("612880_20240721231538_1.png"))
        .unwrap();
    assert_eq!(capture.game_id, GameId(612880));
    assert_eq!(capture.outer_dir, PathBuf::new());

    let folder = GameFolder::new("Test Game", 0);
    let name = DeviceLayout::GamingPc.normalize(&capture.file_name);
    assert_eq!(
        capture.destination(Path::new("/out"), &folder, &name),
        PathBuf::from("/out/Test Game/2024-07-21 at 23-15-38.png")
    );
}

#[test]
fn test_pc_keeps_relative_dir_above_game() {
    let capture = DeviceLayout::GamingPc
        .locate(Path::new("2024/July/7_20240721231538_1.png"))
        .unwrap();
    assert_eq!(capture.outer_dir, PathBuf::from("2024/July"));

    let folder = GameFolder::new("G", 1999);
    assert_eq!(
        capture.destination(Path::new("/out"), &folder, "x.png"),
        PathBuf::from("/out/2024/July/G (1999)/x.png")
    );
}

#[test]
fn test_pc_skips_non_numeric_prefix() {
    assert_eq!(
        DeviceLayout::GamingPc.locate(Path::new("desktop.ini")),
        Err(SkipReason::NotAGameId("desktop.ini".to_string()))
    );
    assert_eq!(
        DeviceLayout::GamingPc.locate(Path::new("shot_20240721231538.png")),
        Err(SkipReason::NotAGameId("shot".to_string()))
    );
}

#[test]
fn test_pc_skips_bare_timestamp() {
    assert_eq!(
        DeviceLayout::GamingPc.locate(Path::new("20240721231538_1.png")),
        Err(SkipReason::NoIdPrefix)
    );
    assert_eq!(
        DeviceLayout::GamingPc.locate(Path::new("2024/20240721231538_1.png")),
        Err(SkipReason::NoIdPrefix)
    );
}
