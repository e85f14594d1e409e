//! The big tap button
//!
//! Hit testing uses the resting rectangle so the bounce never changes what
//! counts as a tap.

use crate::text::{draw_text_centered, text_height};
use crate::ui::animation::Bounce;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub fill_color: Color,
    pub border_color: Color,
    pub label_color: Color,
    pub label_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            fill_color: Color::RGB(255, 152, 0),
            border_color: Color::RGB(230, 81, 0),
            label_color: Color::RGB(255, 255, 255),
            label_scale: 3,
        }
    }
}

pub struct TapButton {
    rect: Rect,
    label: String,
    bounce: Bounce,
    style: ButtonStyle,
}

impl TapButton {
    pub fn new(rect: Rect, label: &str) -> Self {
        TapButton {
            rect,
            label: label.to_string(),
            bounce: Bounce::new(),
            style: ButtonStyle::default(),
        }
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    /// Plays the press animation
    pub fn press(&mut self) {
        self.bounce.start();
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.bounce.is_active()
    }

    pub fn update(&mut self, dt: Duration) {
        self.bounce.update(dt);
    }

    /// Rectangle to draw this frame, scaled around the centre
    pub fn visual_rect(&self) -> Rect {
        let scale = self.bounce.scale();
        let width = (self.rect.width() as f32 * scale).round() as u32;
        let height = (self.rect.height() as f32 * scale).round() as u32;
        Rect::from_center(self.rect.center(), width, height)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = self.visual_rect();

        canvas.set_draw_color(self.style.fill_color);
        canvas.fill_rect(rect)?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(rect)?;
        canvas.draw_rect(Rect::new(
            rect.x() + 1,
            rect.y() + 1,
            rect.width().saturating_sub(2),
            rect.height().saturating_sub(2),
        ))?;

        let label_y = rect.center().y() - (text_height(self.style.label_scale) / 2) as i32;
        draw_text_centered(
            canvas,
            &self.label,
            rect.center().x(),
            label_y,
            self.style.label_color,
            self.style.label_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_testing() {
        let button = TapButton::new(Rect::new(100, 100, 200, 80), "TAP ME!");
        assert!(button.contains(150, 120));
        assert!(!button.contains(99, 120));
        assert!(!button.contains(150, 180));
    }

    #[test]
    fn test_press_bounces_around_centre() {
        let mut button = TapButton::new(Rect::new(100, 100, 200, 80), "TAP ME!");
        assert_eq!(button.visual_rect(), button.rect());

        button.press();
        button.update(Duration::from_millis(150));
        let grown = button.visual_rect();
        assert_eq!(grown.width(), 240);
        assert_eq!(grown.height(), 96);
        assert_eq!(grown.center(), button.rect().center());

        button.update(Duration::from_millis(200));
        assert!(!button.is_animating());
        assert_eq!(button.visual_rect(), button.rect());
    }
}
