//! Tray icon attached to each running display.
//!
//! Menu entries carry ids of the form `countdowner:<verb>:<display id>` and
//! are turned back into [`TrayCommand`]s by [`poll_commands`].

const ID_PREFIX: &str = "countdowner";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    Show(u64),
    Stop(u64),
}

pub fn menu_id(command: TrayCommand) -> String {
    match command {
        TrayCommand::Show(id) => format!("{ID_PREFIX}:show:{id}"),
        TrayCommand::Stop(id) => format!("{ID_PREFIX}:stop:{id}"),
    }
}

pub fn parse_menu_id(raw: &str) -> Option<TrayCommand> {
    let mut parts = raw.splitn(3, ':');
    if parts.next()? != ID_PREFIX {
        return None;
    }
    let verb = parts.next()?;
    let id = parts.next()?.parse().ok()?;
    match verb {
        "show" => Some(TrayCommand::Show(id)),
        "stop" => Some(TrayCommand::Stop(id)),
        _ => None,
    }
}

/// Whether an OS tray icon can be created on this platform.
pub const fn is_supported() -> bool {
    cfg!(target_os = "windows")
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn icon_rgba(size: u32) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    let c = (size as f32 - 1.0) / 2.0;
    let r = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
            if d <= r - 1.0 {
                rgba.extend_from_slice(&[0x2e, 0x9e, 0x5b, 0xff]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    rgba
}

#[cfg(target_os = "windows")]
mod imp {
    use super::{icon_rgba, menu_id, parse_menu_id, TrayCommand};
    use anyhow::Context;
    use tray_icon::menu::{Menu, MenuEvent, MenuItem};
    use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

    const ICON_SIZE: u32 = 32;

    pub struct DisplayTray {
        icon: TrayIcon,
    }

    impl DisplayTray {
        pub fn new(id: u64, tooltip: &str) -> anyhow::Result<Self> {
            let menu = Menu::new();
            let show = MenuItem::with_id(menu_id(TrayCommand::Show(id)), "Show Timer", true, None);
            let stop = MenuItem::with_id(menu_id(TrayCommand::Stop(id)), "Stop Timer", true, None);
            menu.append(&show).context("failed to build tray menu")?;
            menu.append(&stop).context("failed to build tray menu")?;
            let icon = Icon::from_rgba(icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE)
                .context("failed to build tray icon")?;
            let icon = TrayIconBuilder::new()
                .with_menu(Box::new(menu))
                .with_tooltip(tooltip)
                .with_icon(icon)
                .build()
                .context("failed to create tray icon")?;
            Ok(Self { icon })
        }

        pub fn set_tooltip(&self, text: &str) {
            if let Err(e) = self.icon.set_tooltip(Some(text)) {
                tracing::debug!("failed to update tray tooltip: {e}");
            }
        }
    }

    pub fn poll_commands() -> Vec<TrayCommand> {
        let mut out = Vec::new();
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if let Some(cmd) = parse_menu_id(&event.id.0) {
                out.push(cmd);
            }
        }
        out
    }
}

#[cfg(not(target_os = "windows"))]
mod imp {
    use super::TrayCommand;

    /// Placeholder used where no OS tray is available; the main window lists
    /// running displays instead.
    pub struct DisplayTray;

    impl DisplayTray {
        pub fn new(id: u64, _tooltip: &str) -> anyhow::Result<Self> {
            tracing::debug!(id, "tray icons are not supported on this platform");
            Ok(Self)
        }

        pub fn set_tooltip(&self, _text: &str) {}
    }

    pub fn poll_commands() -> Vec<TrayCommand> {
        Vec::new()
    }
}

pub use imp::{poll_commands, DisplayTray};
