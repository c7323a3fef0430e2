use std::fs;

use super_jumper::assets::*;

#[test]
fn empty_directory_falls_back_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Sprites::load(dir.path()), Sprites::fallback());
    assert_eq!(SoundBank::probe(dir.path()), SoundBank::silent());
}

#[test]
fn present_assets_are_available() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PLAYER_SPRITE), " o \n/|\\\n/ \\\n").unwrap();
    fs::write(dir.path().join(COIN_SPRITE), "O\n---\n|\n").unwrap();
    fs::write(dir.path().join(JUMP_SOUND), b"not really an mp3").unwrap();

    let sprites = Sprites::load(dir.path());
    assert!(sprites.player.is_available());
    assert!(!sprites.obstacle.is_available());
    assert_eq!(sprites.coin.as_available().map(Sprite::frame_count), Some(2));

    let sounds = SoundBank::probe(dir.path());
    assert!(sounds.get(Sound::Jump).is_available());
    assert!(!sounds.get(Sound::Coin).is_available());
    assert!(!sounds.get(Sound::GameOver).is_available());
}

#[test]
fn blank_sprite_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(OBSTACLE_SPRITE), "\n   \n").unwrap();
    assert_eq!(Sprites::load(dir.path()).obstacle, Asset::Fallback);
}

#[test]
fn sound_directory_entry_is_not_a_sound() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(GAME_OVER_SOUND)).unwrap();
    assert!(!SoundBank::probe(dir.path()).game_over.is_available());
}

#[test]
fn bundled_assets_parse() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let sprites = Sprites::load(&dir);
    assert!(sprites.player.is_available());
    assert!(sprites.obstacle.is_available());
    assert_eq!(sprites.coin.as_available().map(Sprite::frame_count), Some(4));
}
