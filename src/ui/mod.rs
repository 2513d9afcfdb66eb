// UI module
// Layout, views and reusable components

pub mod chat;
pub mod components;
pub mod layout;
pub mod sidebar;
pub mod workspace;

use eframe::egui;
use std::path::Path;

pub use layout::render_app_layout;
pub use workspace::MarkdownCache;

/// Register a font file as fallback for glyphs missing from egui's built-in fonts
pub fn install_fallback_font(ctx: &egui::Context, path: &Path) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("fallback".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("fallback".to_owned());
    }
    ctx.set_fonts(fonts);
    Ok(())
}
