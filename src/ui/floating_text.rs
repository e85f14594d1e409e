//! Floating "+1" indicators
//!
//! Every tap drops a short-lived "+1" somewhere in the play area. It fades in,
//! stays briefly and is removed once its lifetime is over.
//!
//! # Example
//!
//! ```rust
//! use crate::ui::{FloatingText, ScoreIndicators};
//!
//! let renderer = FloatingText::new();
//! let mut indicators = ScoreIndicators::new(Duration::from_millis(1000));
//!
//! // On tap
//! indicators.spawn(&mut rng, layout.indicator_area);
//!
//! // Each frame
//! indicators.update(dt);
//! for indicator in indicators.iter() {
//!     renderer.render(&mut canvas, indicator)?;
//! }
//! ```

use crate::text::{draw_text, text_height, text_width};
use crate::ui::animation::FadeIn;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

/// Furthest an indicator is placed from the area's top-left corner
const MAX_OFFSET: u32 = 500;
const FADE_IN: Duration = Duration::from_millis(300);

/// Configuration for floating text appearance
#[derive(Debug, Clone)]
pub struct FloatingTextStyle {
    /// Bitmap font scale
    pub scale: u32,

    /// Outline/shadow offset for better visibility
    pub outline_offset: i32,

    pub outline_color: Color,
}

impl Default for FloatingTextStyle {
    fn default() -> Self {
        FloatingTextStyle {
            scale: 4,
            outline_offset: 2,
            outline_color: Color::RGB(0, 0, 0),
        }
    }
}

/// One live "+1"
#[derive(Debug, Clone)]
pub struct ScoreIndicator {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color,
    age: Duration,
    lifetime: Duration,
    fade: FadeIn,
}

impl ScoreIndicator {
    pub fn new(x: i32, y: i32, text: &str, color: Color, lifetime: Duration) -> Self {
        ScoreIndicator {
            x,
            y,
            text: text.to_string(),
            color,
            age: Duration::ZERO,
            lifetime,
            fade: FadeIn::new(FADE_IN),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.age += dt;
        self.fade.update(dt);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    pub fn alpha(&self) -> u8 {
        self.fade.alpha()
    }
}

/// The set of live indicators
#[derive(Debug, Clone)]
pub struct ScoreIndicators {
    items: Vec<ScoreIndicator>,
    lifetime: Duration,
    text: String,
    color: Color,
    scale: u32,
}

impl ScoreIndicators {
    pub fn new(lifetime: Duration) -> Self {
        ScoreIndicators {
            items: Vec::new(),
            lifetime,
            text: "+1".to_string(),
            color: Color::RGB(255, 152, 0),
            scale: FloatingTextStyle::default().scale,
        }
    }

    /// Adds an indicator at a random spot inside `area`
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, area: Rect) -> &ScoreIndicator {
        let max_x = area
            .width()
            .saturating_sub(text_width(&self.text, self.scale))
            .min(MAX_OFFSET);
        let max_y = area
            .height()
            .saturating_sub(text_height(self.scale))
            .min(MAX_OFFSET);

        let x = area.x() + rng.gen_range(0..=max_x) as i32;
        let y = area.y() + rng.gen_range(0..=max_y) as i32;

        self.items.push(ScoreIndicator::new(
            x,
            y,
            &self.text,
            self.color,
            self.lifetime,
        ));
        &self.items[self.items.len() - 1]
    }

    /// Ages every indicator and drops the expired ones
    pub fn update(&mut self, dt: Duration) {
        for item in &mut self.items {
            item.update(dt);
        }
        self.items.retain(|item| !item.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreIndicator> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stateless renderer for indicators
pub struct FloatingText {
    style: FloatingTextStyle,
}

impl FloatingText {
    pub fn new() -> Self {
        FloatingText {
            style: FloatingTextStyle::default(),
        }
    }

    #[cfg(test)]
    pub fn with_style(style: FloatingTextStyle) -> Self {
        FloatingText { style }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, indicator: &ScoreIndicator) -> Result<(), String> {
        let alpha = indicator.alpha();
        if alpha == 0 {
            return Ok(());
        }

        let outline = Color::RGBA(
            self.style.outline_color.r,
            self.style.outline_color.g,
            self.style.outline_color.b,
            alpha,
        );
        let fill = Color::RGBA(indicator.color.r, indicator.color.g, indicator.color.b, alpha);

        draw_text(
            canvas,
            &indicator.text,
            indicator.x + self.style.outline_offset,
            indicator.y + self.style.outline_offset,
            outline,
            self.style.scale,
        )?;
        draw_text(canvas, &indicator.text, indicator.x, indicator.y, fill, self.style.scale)
    }
}

impl Default for FloatingText {
    fn default() -> Self {
        Self::new()
    }
}
