//! About Dialog Component
//!
//! Modal box with the app name, version and a short message. Any click,
//! Enter or Escape dismisses it.

use crate::strings;
use crate::text::{draw_text, draw_text_centered, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for dialog appearance
#[derive(Debug, Clone)]
pub struct AboutDialogStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,
    pub background_color: Color,
    pub title_color: Color,
    pub message_color: Color,
    pub hint_color: Color,
}

impl Default for AboutDialogStyle {
    fn default() -> Self {
        AboutDialogStyle {
            overlay_alpha: 150,
            background_color: Color::RGB(255, 255, 255),
            title_color: Color::RGB(33, 33, 33),
            message_color: Color::RGB(66, 66, 66),
            hint_color: Color::RGB(150, 150, 160),
        }
    }
}

pub struct AboutDialog {
    title: String,
    message: String,
    visible: bool,
    style: AboutDialogStyle,
}

/// Breaks `text` into lines no wider than `max_width` pixels at `scale`
fn wrap_text(text: &str, max_width: u32, scale: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, scale) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl AboutDialog {
    pub fn new(version: &str) -> Self {
        AboutDialog {
            title: strings::about_title(version),
            message: strings::ABOUT_MESSAGE.to_string(),
            visible: false,
            style: AboutDialogStyle::default(),
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let dialog_width = screen_width.saturating_sub(40).min(420);
        let lines = wrap_text(&self.message, dialog_width - 32, 1);
        let line_height = text_height(1) as i32 + 6;
        let dialog_height = 90 + lines.len() as u32 * line_height as u32;

        let dialog = Rect::from_center(
            ((screen_width / 2) as i32, (screen_height / 2) as i32),
            dialog_width,
            dialog_height,
        );

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(dialog)?;

        draw_text(
            canvas,
            &self.title,
            dialog.x() + 16,
            dialog.y() + 16,
            self.style.title_color,
            2,
        )?;

        let mut y = dialog.y() + 48;
        for line in &lines {
            draw_text(canvas, line, dialog.x() + 16, y, self.style.message_color, 1)?;
            y += line_height;
        }

        draw_text_centered(
            canvas,
            strings::DISMISS_HINT,
            dialog.center().x(),
            dialog.bottom() - 20,
            self.style.hint_color,
            1,
        )
    }
}
