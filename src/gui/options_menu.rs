//! Options Menu Component
//!
//! The app bar's overflow menu. It has a single entry, "About".

use super::{Menu, MenuItem};
use crate::strings;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Options in the options menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionsMenuItem {
    About,
}

impl OptionsMenuItem {
    fn all() -> [Self; 1] {
        [OptionsMenuItem::About]
    }

    fn label(self) -> &'static str {
        match self {
            OptionsMenuItem::About => strings::MENU_ABOUT,
        }
    }
}

/// Type-safe wrapper around the base `Menu`
pub struct OptionsMenu {
    menu: Menu,
}

impl OptionsMenu {
    pub fn new() -> Self {
        let items = OptionsMenuItem::all()
            .iter()
            .map(|item| MenuItem::new(item.label()))
            .collect();

        OptionsMenu {
            menu: Menu::new(items),
        }
    }

    pub fn open(&mut self) {
        self.menu.open();
    }

    pub fn close(&mut self) {
        self.menu.close();
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    /// Get selected option
    pub fn selected_option(&self) -> Option<OptionsMenuItem> {
        OptionsMenuItem::all().get(self.menu.selected_index()).copied()
    }

    /// Option under a click, if any
    pub fn option_at(&self, x: i32, y: i32, screen_width: u32) -> Option<OptionsMenuItem> {
        self.menu
            .item_at(x, y, screen_width)
            .and_then(|index| OptionsMenuItem::all().get(index).copied())
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.menu.render(canvas)
    }
}

impl Default for OptionsMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_about() {
        let mut menu = OptionsMenu::new();
        assert_eq!(menu.selected_option(), Some(OptionsMenuItem::About));
        menu.navigate_down();
        assert_eq!(menu.selected_option(), Some(OptionsMenuItem::About));
        menu.navigate_up();
        assert_eq!(menu.selected_option(), Some(OptionsMenuItem::About));
    }
}
