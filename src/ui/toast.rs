//! Toast: a transient message near the bottom of the screen

use crate::text::{draw_text_centered, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::time::Duration;

pub const TOAST_LONG: Duration = Duration::from_millis(3500);
const FADE_OUT: Duration = Duration::from_millis(300);
const PADDING: u32 = 8;
const SCALE: u32 = 1;

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<String>,
    remaining: Duration,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is showing
    pub fn show(&mut self, message: String, duration: Duration) {
        self.message = Some(message);
        self.remaining = duration;
    }

    pub fn update(&mut self, dt: Duration) {
        if self.message.is_none() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.message = None;
        }
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn alpha(&self) -> u8 {
        if self.remaining >= FADE_OUT {
            255
        } else {
            (self.remaining.as_secs_f32() / FADE_OUT.as_secs_f32() * 255.0) as u8
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let Some(message) = &self.message else {
            return Ok(());
        };

        let (screen_width, screen_height) = canvas.logical_size();
        let alpha = self.alpha();
        let box_width = text_width(message, SCALE) + PADDING * 2;
        let box_height = text_height(SCALE) + PADDING * 2;
        let box_rect = Rect::new(
            (screen_width as i32 - box_width as i32) / 2,
            screen_height as i32 - box_height as i32 - 40,
            box_width,
            box_height,
        );

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(50, 50, 50, alpha.min(220)));
        canvas.fill_rect(box_rect)?;
        canvas.set_blend_mode(BlendMode::None);

        draw_text_centered(
            canvas,
            message,
            box_rect.center().x(),
            box_rect.y() + PADDING as i32,
            Color::RGBA(255, 255, 255, alpha),
            SCALE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_disappears_after_duration() {
        let mut toast = Toast::new();
        assert!(toast.message().is_none());

        toast.show("Time's up!".to_string(), TOAST_LONG);
        toast.update(Duration::from_millis(3000));
        assert_eq!(toast.message(), Some("Time's up!"));

        toast.update(Duration::from_millis(500));
        assert!(toast.message().is_none());
    }

    #[test]
    fn test_new_message_replaces_old() {
        let mut toast = Toast::new();
        toast.show("first".to_string(), TOAST_LONG);
        toast.update(Duration::from_millis(3000));
        toast.show("second".to_string(), TOAST_LONG);
        toast.update(Duration::from_millis(3000));
        assert_eq!(toast.message(), Some("second"));
    }

    #[test]
    fn test_fades_out_at_the_end() {
        let mut toast = Toast::new();
        toast.show("bye".to_string(), TOAST_LONG);
        assert_eq!(toast.alpha(), 255);
        toast.update(Duration::from_millis(3350));
        assert!(toast.alpha() < 255);
    }
}
