use crate::preset::{FontChoice, FontSpec};
use anyhow::{bail, Context};
use eframe::egui;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Font files picked by the user, registered with egui under
/// `FontFamily::Name`.
///
/// egui applies new font definitions at the start of the next frame, so a
/// family is only used once [`FontRegistry::apply`] has seen it installed.
/// Until then text falls back to the proportional font.
#[derive(Default)]
pub struct FontRegistry {
    files: BTreeMap<PathBuf, (String, Vec<u8>)>,
    dirty: bool,
    installed: HashSet<String>,
}

impl FontRegistry {
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Read a font file and queue it for registration.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        if self.contains(path) {
            return Ok(());
        }
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        if !looks_like_font(&bytes) {
            bail!("{} is not a TrueType/OpenType font", path.display());
        }
        let key = format!("font:{}", path.display());
        tracing::debug!(key = %key, "font file loaded");
        self.files.insert(path.to_path_buf(), (key, bytes));
        self.dirty = true;
        Ok(())
    }

    /// Push pending fonts to egui and refresh the set of usable families.
    pub fn apply(&mut self, ctx: &egui::Context) {
        if self.dirty {
            let mut defs = egui::FontDefinitions::default();
            let fallback = defs
                .families
                .get(&egui::FontFamily::Proportional)
                .cloned()
                .unwrap_or_default();
            for (key, bytes) in self.files.values() {
                defs.font_data
                    .insert(key.clone(), egui::FontData::from_owned(bytes.clone()));
                let mut chain = vec![key.clone()];
                chain.extend(fallback.iter().cloned());
                defs.families
                    .insert(egui::FontFamily::Name(key.as_str().into()), chain);
            }
            ctx.set_fonts(defs);
            self.dirty = false;
        }
        self.installed = ctx.fonts(|f| {
            f.families()
                .into_iter()
                .filter_map(|family| match family {
                    egui::FontFamily::Name(name) => Some(name.to_string()),
                    _ => None,
                })
                .collect()
        });
    }

    pub fn family(&self, choice: &FontChoice) -> egui::FontFamily {
        match choice {
            FontChoice::Proportional => egui::FontFamily::Proportional,
            FontChoice::Monospace => egui::FontFamily::Monospace,
            FontChoice::File(path) => match self.files.get(path) {
                Some((key, _)) if self.installed.contains(key) => {
                    egui::FontFamily::Name(key.as_str().into())
                }
                _ => egui::FontFamily::Proportional,
            },
        }
    }

    pub fn font_id(&self, spec: &FontSpec, size: f32) -> egui::FontId {
        egui::FontId::new(size, self.family(&spec.choice))
    }
}

fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_font.ttf");
        std::fs::write(&path, b"hello world").unwrap();
        let mut fonts = FontRegistry::default();
        assert!(fonts.load(&path).is_err());
        assert!(!fonts.contains(&path));
    }

    #[test]
    fn unloaded_file_falls_back_to_proportional() {
        let fonts = FontRegistry::default();
        let family = fonts.family(&FontChoice::File(PathBuf::from("missing.ttf")));
        assert_eq!(family, egui::FontFamily::Proportional);
    }
}
