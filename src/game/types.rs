// Shared enums and layout helpers used by the screen

use crate::config::GameConfig;
use sdl2::rect::Rect;

/// Height of the title bar holding the app name and the menu button
pub const APP_BAR_HEIGHT: u32 = 32;
const MENU_BUTTON_SIZE: u32 = 24;
const MARGIN: i32 = 16;

/// Smallest logical edge the layout fits on: app bar, info row, a minimum
/// size tap button and margins
pub const MIN_SCREEN_EDGE: u32 = 128;

/// Window orientation; rotating tears the screen down and rebuilds it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Logical (width, height) for this orientation
    pub fn dimensions(self, config: &GameConfig) -> (u32, u32) {
        match self {
            Orientation::Portrait => (config.screen_short_edge, config.screen_long_edge),
            Orientation::Landscape => (config.screen_long_edge, config.screen_short_edge),
        }
    }
}

/// Where everything on the screen goes for a given logical size
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub width: u32,
    pub height: u32,
    pub app_bar: Rect,
    pub menu_button: Rect,
    pub score_position: (i32, i32),
    /// Right edge the time text is aligned against
    pub time_anchor: (i32, i32),
    pub tap_button: Rect,
    /// Area the "+1" indicators appear in
    pub indicator_area: Rect,
}

impl ScreenLayout {
    pub fn new(width: u32, height: u32) -> Self {
        let app_bar = Rect::new(0, 0, width, APP_BAR_HEIGHT);
        let menu_button = Rect::new(
            width as i32 - MENU_BUTTON_SIZE as i32 - 4,
            ((APP_BAR_HEIGHT - MENU_BUTTON_SIZE) / 2) as i32,
            MENU_BUTTON_SIZE,
            MENU_BUTTON_SIZE,
        );

        let info_y = APP_BAR_HEIGHT as i32 + MARGIN;
        let score_position = (MARGIN, info_y);
        let time_anchor = (width as i32 - MARGIN, info_y);

        let button_width = (width / 2).max(120);
        let button_height = (height / 6).max(48);
        let tap_button = Rect::from_center(
            ((width / 2) as i32, (APP_BAR_HEIGHT + height.saturating_sub(APP_BAR_HEIGHT) / 2) as i32),
            button_width,
            button_height,
        );

        let area_top = info_y + 24;
        let indicator_area = Rect::new(
            MARGIN,
            area_top,
            width.saturating_sub(2 * MARGIN as u32).max(1),
            (height as i32 - area_top - MARGIN).max(1) as u32,
        );

        ScreenLayout {
            width,
            height,
            app_bar,
            menu_button,
            score_position,
            time_anchor,
            tap_button,
            indicator_area,
        }
    }

    pub fn for_orientation(orientation: Orientation, config: &GameConfig) -> Self {
        let (width, height) = orientation.dimensions(config);
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_swaps_dimensions() {
        let config = GameConfig::default();
        assert_eq!(Orientation::Portrait.dimensions(&config), (360, 640));
        assert_eq!(Orientation::Portrait.rotated().dimensions(&config), (640, 360));
        assert_eq!(Orientation::Landscape.rotated(), Orientation::Portrait);
    }

    #[test]
    fn test_layout_fits_screen() {
        for (w, h) in [(360, 640), (640, 360)] {
            let layout = ScreenLayout::new(w, h);
            let screen = Rect::new(0, 0, w, h);

            assert!(screen.contains_rect(layout.tap_button));
            assert!(screen.contains_rect(layout.menu_button));
            assert!(screen.contains_rect(layout.indicator_area));
            assert!(!layout.menu_button.has_intersection(layout.tap_button));
        }
    }

    #[test]
    fn test_smallest_screen_fits() {
        let layout = ScreenLayout::new(MIN_SCREEN_EDGE, MIN_SCREEN_EDGE);
        let screen = Rect::new(0, 0, MIN_SCREEN_EDGE, MIN_SCREEN_EDGE);
        assert!(screen.contains_rect(layout.tap_button));
        assert!(screen.contains_rect(layout.indicator_area));
        assert!(!layout.menu_button.has_intersection(layout.tap_button));
    }

    #[test]
    fn test_tiny_screen_does_not_panic() {
        let layout = ScreenLayout::new(20, 30);
        assert_eq!((layout.width, layout.height), (20, 30));
    }
}
