pub mod common;
pub mod countdown;
pub mod display;
pub mod draggable;
pub mod editor;
pub mod gui;
pub mod logging;
pub mod media;
pub mod preset;
pub mod registry;
pub mod settings;
pub mod sound;
pub mod tray;
