//! Decoding of display backgrounds.

use crate::preset::{Background, BackgroundKind};
use anyhow::{bail, Context};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

/// Delay used for GIF frames that declare none.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Decoded background: one frame for static images, several for GIFs.
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub frames: Vec<RgbaImage>,
    pub delays: Vec<Duration>,
}

impl Backdrop {
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Index of the frame to show `elapsed` after playback started.
    pub fn frame_at(&self, elapsed: Duration) -> usize {
        frame_index(&self.delays, elapsed)
    }
}

pub fn load_background(background: &Background) -> anyhow::Result<Backdrop> {
    match background.kind {
        BackgroundKind::Static => {
            let img = image::open(&background.path)
                .with_context(|| format!("failed to open {}", background.path.display()))?
                .to_rgba8();
            Ok(Backdrop {
                frames: vec![img],
                delays: vec![Duration::ZERO],
            })
        }
        BackgroundKind::Animated => {
            let file = File::open(&background.path)
                .with_context(|| format!("failed to open {}", background.path.display()))?;
            let decoder = GifDecoder::new(BufReader::new(file))
                .with_context(|| format!("failed to decode {}", background.path.display()))?;
            let frames = decoder
                .into_frames()
                .collect_frames()
                .with_context(|| format!("failed to decode {}", background.path.display()))?;
            if frames.is_empty() {
                bail!("{} contains no frames", background.path.display());
            }
            let mut delays = Vec::with_capacity(frames.len());
            let mut images = Vec::with_capacity(frames.len());
            for frame in frames {
                let (numer, denom) = frame.delay().numer_denom_ms();
                let ms = if denom == 0 { 0 } else { numer / denom };
                delays.push(if ms == 0 {
                    DEFAULT_FRAME_DELAY
                } else {
                    Duration::from_millis(ms as u64)
                });
                images.push(frame.into_buffer());
            }
            tracing::debug!(frames = images.len(), path = %background.path.display(), "decoded animated background");
            Ok(Backdrop {
                frames: images,
                delays,
            })
        }
    }
}

/// Pick the frame for `elapsed` when the sequence loops forever.
pub fn frame_index(delays: &[Duration], elapsed: Duration) -> usize {
    let total: Duration = delays.iter().sum();
    if delays.len() <= 1 || total.is_zero() {
        return 0;
    }
    let mut t = Duration::from_nanos((elapsed.as_nanos() % total.as_nanos()) as u64);
    for (idx, delay) in delays.iter().enumerate() {
        if t < *delay {
            return idx;
        }
        t -= *delay;
    }
    delays.len() - 1
}
