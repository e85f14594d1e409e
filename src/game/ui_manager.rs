// UIManager struct
//
// Holds the overlays (options menu, about dialog), the toast and the score
// blink. While an overlay is open it gets first look at every action.

use crate::gui::{AboutDialog, OptionsMenu, OptionsMenuItem};
use crate::input_system::{GameAction, InputContext};
use crate::ui::{Blink, Toast};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

use super::types::ScreenLayout;

pub struct UIManager {
    pub options_menu: OptionsMenu,
    pub about_dialog: AboutDialog,
    pub toast: Toast,
    pub score_blink: Blink,
}

impl UIManager {
    pub fn new(version: &str) -> Self {
        UIManager {
            options_menu: OptionsMenu::new(),
            about_dialog: AboutDialog::new(version),
            toast: Toast::new(),
            score_blink: Blink::new(),
        }
    }

    /// Which overlay, if any, owns input right now
    pub fn input_context(&self) -> InputContext {
        if self.about_dialog.is_visible() {
            InputContext::Dialog
        } else if self.options_menu.is_open() {
            InputContext::Menu
        } else {
            InputContext::Playing
        }
    }

    /// Gives the overlays a chance to handle `action`.
    ///
    /// Returns true when the action was consumed and must not reach the game.
    pub fn handle_overlay_action(&mut self, action: &GameAction, layout: &ScreenLayout) -> bool {
        match self.input_context() {
            InputContext::Dialog => {
                if matches!(
                    action,
                    GameAction::Click(..) | GameAction::Dismiss | GameAction::MenuConfirm
                ) {
                    self.about_dialog.dismiss();
                }
                true
            }
            InputContext::Menu => {
                match action {
                    GameAction::MenuUp => self.options_menu.navigate_up(),
                    GameAction::MenuDown => self.options_menu.navigate_down(),
                    GameAction::MenuConfirm => match self.options_menu.selected_option() {
                        Some(option) => self.choose(option),
                        None => self.options_menu.close(),
                    },
                    GameAction::Click(x, y) => {
                        match self.options_menu.option_at(*x, *y, layout.width) {
                            Some(option) => self.choose(option),
                            // Clicking outside closes the menu
                            None => self.options_menu.close(),
                        }
                    }
                    GameAction::Dismiss | GameAction::OpenMenu | GameAction::Tap => {
                        self.options_menu.close()
                    }
                    GameAction::Rotate | GameAction::Quit => {}
                }
                true
            }
            InputContext::Playing => match action {
                GameAction::OpenMenu => {
                    self.options_menu.open();
                    true
                }
                GameAction::Click(x, y) if layout.menu_button.contains_point((*x, *y)) => {
                    self.options_menu.open();
                    true
                }
                _ => false,
            },
        }
    }

    fn choose(&mut self, option: OptionsMenuItem) {
        self.options_menu.close();
        match option {
            OptionsMenuItem::About => {
                log::debug!("Showing about dialog");
                self.about_dialog.show();
            }
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.toast.update(dt);
        self.score_blink.update(dt);
    }

    /// Draws toast, menu and dialog, in that order
    pub fn render_overlays(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.toast.render(canvas)?;
        self.options_menu.render(canvas)?;
        self.about_dialog.render(canvas)
    }
}
