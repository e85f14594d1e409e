//! Base Menu Component
//!
//! A drop-down list anchored under the app bar's right edge. Supports
//! keyboard navigation, mouse hit testing and selection highlighting.

use crate::game::types::APP_BAR_HEIGHT;
use crate::text::{draw_text, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu width in pixels
    pub width: u32,

    /// Height of one item row
    pub item_height: u32,

    pub background_color: Color,
    pub border_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,

    /// Bitmap font scale for item text
    pub text_scale: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 140,
            item_height: 32,
            background_color: Color::RGB(250, 250, 250),
            border_color: Color::RGB(189, 189, 189),
            item_color: Color::RGB(33, 33, 33),
            selected_item_color: Color::RGB(0, 0, 0),
            highlight_color: Color::RGB(224, 224, 224),
            text_scale: 2,
        }
    }
}

/// A menu item
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: &str) -> Self {
        MenuItem {
            text: text.to_string(),
        }
    }
}

/// A stateful drop-down menu
pub struct Menu {
    items: Vec<MenuItem>,
    selected_index: usize,
    open: bool,
    style: MenuStyle,
}

impl Menu {
    /// Creates a closed menu with default styling
    pub fn new(items: Vec<MenuItem>) -> Self {
        Menu {
            items,
            selected_index: 0,
            open: false,
            style: MenuStyle::default(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Screen rectangle of item `index` for a screen `screen_width` wide
    pub fn item_rect(&self, index: usize, screen_width: u32) -> Rect {
        let x = screen_width as i32 - self.style.width as i32 - 4;
        let y = APP_BAR_HEIGHT as i32 + (index as u32 * self.style.item_height) as i32;
        Rect::new(x, y, self.style.width, self.style.item_height)
    }

    /// Index of the item under (`x`, `y`), if any
    pub fn item_at(&self, x: i32, y: i32, screen_width: u32) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.item_rect(i, screen_width).contains_point((x, y)))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if !self.open || self.items.is_empty() {
            return Ok(());
        }

        let (screen_width, _) = canvas.logical_size();
        let first = self.item_rect(0, screen_width);
        let frame = Rect::new(
            first.x(),
            first.y(),
            self.style.width,
            self.style.item_height * self.items.len() as u32,
        );

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)?;

        for (i, item) in self.items.iter().enumerate() {
            let rect = self.item_rect(i, screen_width);
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    rect.x() + 1,
                    rect.y() + 1,
                    rect.width() - 2,
                    rect.height() - 2,
                ))?;
            }

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };

            let text_y = rect.y() + (rect.height() - text_height(self.style.text_scale)) as i32 / 2;
            draw_text(
                canvas,
                &item.text,
                rect.x() + 12,
                text_y,
                text_color,
                self.style.text_scale,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(vec![MenuItem::new("ONE"), MenuItem::new("TWO")])
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = menu();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 1);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_open_resets_selection() {
        let mut menu = menu();
        menu.select_next();
        menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.selected_index(), 0);
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_item_hit_testing() {
        let menu = menu();
        let second = menu.item_rect(1, 360);
        assert_eq!(menu.item_at(second.center().x(), second.center().y(), 360), Some(1));
        assert_eq!(menu.item_at(5, 5, 360), None);
    }

    #[test]
    fn test_below_last_item_misses() {
        let menu = menu();
        let last = menu.item_rect(1, 360);
        assert_eq!(menu.item_at(last.center().x(), last.bottom() + 1, 360), None);
    }
}
