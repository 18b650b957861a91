use std::path::Path;

/// Plays alarm sounds when a countdown finishes.
pub trait AlarmPlayer {
    /// Start playing `path` once. Playback continues in the background.
    fn play(&self, path: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RodioPlayer;

#[cfg(target_os = "windows")]
impl AlarmPlayer for RodioPlayer {
    fn play(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;
        use std::fs::File;
        use std::io::BufReader;

        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let source = rodio::Decoder::new(BufReader::new(file))
            .with_context(|| format!("unsupported audio file {}", path.display()))?;
        // The output stream stops when dropped, so keep it on the playback thread.
        std::thread::spawn(move || {
            let Ok((_stream, handle)) = rodio::OutputStream::try_default() else {
                tracing::warn!("no audio output device");
                return;
            };
            match rodio::Sink::try_new(&handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.sleep_until_end();
                }
                Err(e) => tracing::warn!("failed to create audio sink: {e}"),
            }
        });
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
impl AlarmPlayer for RodioPlayer {
    fn play(&self, path: &Path) -> anyhow::Result<()> {
        anyhow::ensure!(path.exists(), "alarm file {} not found", path.display());
        tracing::warn!(path = %path.display(), "audio playback is not available on this platform");
        Ok(())
    }
}
