use countdowner::media::{frame_index, load_background, DEFAULT_FRAME_DELAY};
use countdowner::preset::Background;
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::time::Duration;
use tempfile::tempdir;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn frame_index_loops() {
    let delays = [ms(100), ms(200), ms(100)];
    assert_eq!(frame_index(&delays, ms(0)), 0);
    assert_eq!(frame_index(&delays, ms(99)), 0);
    assert_eq!(frame_index(&delays, ms(100)), 1);
    assert_eq!(frame_index(&delays, ms(299)), 1);
    assert_eq!(frame_index(&delays, ms(300)), 2);
    assert_eq!(frame_index(&delays, ms(400)), 0);
    assert_eq!(frame_index(&delays, ms(4_150)), 1);
}

#[test]
fn frame_index_of_single_frame_is_zero() {
    assert_eq!(frame_index(&[Duration::ZERO], ms(5_000)), 0);
    assert_eq!(frame_index(&[], ms(5_000)), 0);
}

#[test]
fn static_background_has_one_frame() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bg.png");
    RgbaImage::from_pixel(8, 6, Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();
    let backdrop = load_background(&Background::from_path(&path)).unwrap();
    assert!(!backdrop.is_animated());
    assert_eq!(backdrop.frames[0].dimensions(), (8, 6));
}

#[test]
fn gif_background_decodes_all_frames() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bg.gif");
    {
        let mut encoder = GifEncoder::new(File::create(&path).unwrap());
        for color in [[255, 0, 0, 255], [0, 0, 255, 255]] {
            let frame = Frame::from_parts(
                RgbaImage::from_pixel(4, 4, Rgba(color)),
                0,
                0,
                Delay::from_numer_denom_ms(200, 1),
            );
            encoder.encode_frame(frame).unwrap();
        }
    }
    let backdrop = load_background(&Background::from_path(&path)).unwrap();
    assert!(backdrop.is_animated());
    assert_eq!(backdrop.frames.len(), 2);
    assert_eq!(backdrop.delays, vec![ms(200), ms(200)]);
    assert_eq!(backdrop.frame_at(ms(250)), 1);
    assert_ne!(DEFAULT_FRAME_DELAY, Duration::ZERO);
}

#[test]
fn missing_background_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_background(&Background::from_path(dir.path().join("nope.png")));
    assert!(err.is_err());
    let err = load_background(&Background::from_path(dir.path().join("nope.gif")));
    assert!(err.is_err());
}
