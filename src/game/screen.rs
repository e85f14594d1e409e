// TapScreen: the one game screen
//
// Reacts to taps, countdown ticks and lifecycle calls (create, save, destroy),
// and keeps the score/time text, button, "+1" indicators and overlays in sync
// with the game model.

use crate::config::GameConfig;
use crate::input_system::{GameAction, InputContext};
use crate::save::{GameSnapshot, InstanceState, Saveable, StateError};
use crate::strings;
use crate::text::{draw_text, draw_text_right};
use crate::ui::{FloatingText, ScoreIndicators, TapButton, TOAST_LONG};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

use super::state::{GameEvent, TapGame};
use super::types::{Orientation, ScreenLayout};
use super::ui_manager::UIManager;

const BACKGROUND_COLOR: Color = Color::RGB(255, 243, 224);
const APP_BAR_COLOR: Color = Color::RGB(230, 81, 0);
const APP_BAR_TEXT_COLOR: Color = Color::RGB(255, 255, 255);
const INFO_TEXT_COLOR: Color = Color::RGB(33, 33, 33);

pub struct TapScreen {
    orientation: Orientation,
    layout: ScreenLayout,
    game: TapGame,
    button: TapButton,
    indicators: ScoreIndicators,
    indicator_renderer: FloatingText,
    ui: UIManager,
    score_text: String,
    time_text: String,
    rng: StdRng,
}

impl TapScreen {
    /// Builds the screen, restoring the game from `saved` when given.
    ///
    /// A bundle that cannot be read is logged and a fresh game starts instead.
    pub fn create(config: &GameConfig, orientation: Orientation, saved: Option<&InstanceState>) -> Self {
        Self::create_with_rng(config, orientation, saved, StdRng::from_entropy())
    }

    pub fn create_with_rng(
        config: &GameConfig,
        orientation: Orientation,
        saved: Option<&InstanceState>,
        rng: StdRng,
    ) -> Self {
        let game = match saved.map(GameSnapshot::restore_state) {
            Some(Ok(snapshot)) => TapGame::restore(config, snapshot),
            Some(Err(e)) => {
                warn!("Discarding unreadable saved state: {}", e);
                TapGame::new(config)
            }
            None => TapGame::new(config),
        };

        let layout = ScreenLayout::for_orientation(orientation, config);
        let mut screen = TapScreen {
            orientation,
            button: TapButton::new(layout.tap_button, strings::TAP_ME),
            layout,
            game,
            indicators: ScoreIndicators::new(config.indicator_lifetime()),
            indicator_renderer: FloatingText::new(),
            ui: UIManager::new(env!("CARGO_PKG_VERSION")),
            score_text: String::new(),
            time_text: String::new(),
            rng,
        };
        screen.refresh_texts();

        debug!(
            "create called ({:?}). Score is {}",
            screen.orientation,
            screen.game.score()
        );
        screen
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn time_left(&self) -> Duration {
        self.game.time_left()
    }

    pub fn input_context(&self) -> InputContext {
        self.ui.input_context()
    }

    pub fn handle_action(&mut self, action: &GameAction) {
        if self.ui.handle_overlay_action(action, &self.layout) {
            return;
        }

        match action {
            GameAction::Tap => self.on_tap(),
            GameAction::Click(x, y) if self.button.contains(*x, *y) => self.on_tap(),
            _ => {}
        }
    }

    /// Advances the countdown and all animations by `dt`
    pub fn update(&mut self, dt: Duration) {
        // Age overlays first so a toast raised this frame keeps its full time
        self.button.update(dt);
        self.indicators.update(dt);
        self.ui.update(dt);

        let events = self.game.advance(dt);
        self.apply_events(events);
    }

    /// Writes the game values into a bundle and stops the countdown; the
    /// screen is about to be torn down.
    pub fn save_instance_state(&mut self) -> Result<InstanceState, StateError> {
        let snapshot = self.game.snapshot();
        let mut state = InstanceState::new();
        snapshot.save_state(&mut state)?;
        self.game.pause();

        debug!(
            "save_instance_state: Saving Score: {} & Time Left: {}ms",
            snapshot.score,
            snapshot.time_left.as_millis()
        );
        Ok(state)
    }

    /// Tears the screen down, stopping the countdown if it is still running
    pub fn destroy(mut self) {
        if self.game.is_counting_down() {
            self.game.pause();
        }
        debug!("destroy called");
    }

    fn on_tap(&mut self) {
        self.button.press();

        let events = self.game.tap();
        self.apply_events(events);

        self.ui.score_blink.start();
        self.indicators.spawn(&mut self.rng, self.layout.indicator_area);
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Started => info!("Game started"),
                GameEvent::ScoreChanged(score) => {
                    self.score_text = strings::your_score(score);
                }
                GameEvent::TimeChanged(remaining) => {
                    self.time_text = strings::time_left(remaining.as_secs());
                }
                GameEvent::GameOver { final_score } => {
                    info!("Game over, final score {}", final_score);
                    self.ui
                        .toast
                        .show(strings::game_over(final_score), TOAST_LONG);
                }
                GameEvent::Reset => self.refresh_texts(),
            }
        }
    }

    fn refresh_texts(&mut self) {
        self.score_text = strings::your_score(self.game.score());
        self.time_text = strings::time_left(self.game.time_left().as_secs());
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        self.render_app_bar(canvas)?;

        let blink = self.ui.score_blink.alpha();
        let (score_x, score_y) = self.layout.score_position;
        draw_text(
            canvas,
            &self.score_text,
            score_x,
            score_y,
            Color::RGBA(INFO_TEXT_COLOR.r, INFO_TEXT_COLOR.g, INFO_TEXT_COLOR.b, blink),
            2,
        )?;

        let (time_x, time_y) = self.layout.time_anchor;
        draw_text_right(canvas, &self.time_text, time_x, time_y, INFO_TEXT_COLOR, 2)?;

        self.button.render(canvas)?;

        for indicator in self.indicators.iter() {
            self.indicator_renderer.render(canvas, indicator)?;
        }

        self.ui.render_overlays(canvas)
    }

    fn render_app_bar(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(APP_BAR_COLOR);
        canvas.fill_rect(self.layout.app_bar)?;

        draw_text(canvas, strings::APP_NAME, 12, 11, APP_BAR_TEXT_COLOR, 2)?;

        // Three vertical dots
        let button = self.layout.menu_button;
        let dot_x = button.center().x() - 1;
        canvas.set_draw_color(APP_BAR_TEXT_COLOR);
        for i in -1..=1 {
            canvas.fill_rect(Rect::new(dot_x, button.center().y() - 1 + i * 6, 3, 3))?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl TapScreen {
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn is_started(&self) -> bool {
        self.game.is_started()
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.ui.toast.message()
    }
}
