use std::path::PathBuf;

/// A named set of file extensions offered by a file dialog.
pub type FileFilter<'a> = (&'a str, &'a [&'a str]);

pub const AUDIO_FILTER: FileFilter<'static> = ("Audio", &["wav", "mp3", "ogg", "flac"]);
pub const IMAGE_FILTER: FileFilter<'static> = ("Images", &["png", "jpg", "jpeg", "bmp", "gif"]);
pub const FONT_FILTER: FileFilter<'static> = ("Fonts", &["ttf", "otf"]);

/// Source of file paths chosen by the user. `None` means the dialog was
/// cancelled.
pub trait FilePicker {
    fn pick_file(&self, title: &str, filter: FileFilter<'_>) -> Option<PathBuf>;
}

/// Blocking native file dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

#[cfg(target_os = "windows")]
impl FilePicker for NativeFilePicker {
    fn pick_file(&self, title: &str, filter: FileFilter<'_>) -> Option<PathBuf> {
        let (name, exts) = filter;
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter(name, exts)
            .pick_file()
    }
}

#[cfg(not(target_os = "windows"))]
impl FilePicker for NativeFilePicker {
    fn pick_file(&self, title: &str, _filter: FileFilter<'_>) -> Option<PathBuf> {
        tracing::warn!(title, "native file dialog is not available on this platform");
        None
    }
}
