use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Everything the player can ask the game to do
///
/// Raw SDL input is translated into these so the screen never sees SDL
/// events directly.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Gameplay ===
    Tap,
    Click(i32, i32),

    // === Menu ===
    OpenMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,
    Dismiss,

    // === Lifecycle ===
    Rotate,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal gameplay
    Playing,
    /// Options menu is open
    Menu,
    /// About dialog is showing
    Dialog,
}

/// InputSystem processes SDL2 events and produces GameActions
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Playing context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Call before `poll_events` so keys are filtered for the right context
    pub fn update_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drains pending SDL2 events into actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps one SDL2 event to an action, if it means anything here
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => self.handle_keydown(*key, *repeat),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::Click(*x, *y)),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        // Rotation works in every context
        if matches!(key, Keycode::R | Keycode::F11) {
            return (!repeat).then_some(GameAction::Rotate);
        }

        match self.context {
            InputContext::Playing => self.handle_playing_keys(key, repeat),
            InputContext::Menu => self.handle_menu_keys(key),
            InputContext::Dialog => self.handle_dialog_keys(key),
        }
    }

    fn handle_playing_keys(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        match key {
            // Holding a key down must not auto-tap
            Keycode::Space | Keycode::Return if !repeat => Some(GameAction::Tap),
            Keycode::F1 | Keycode::Menu | Keycode::M => Some(GameAction::OpenMenu),
            Keycode::Escape => Some(GameAction::Quit),
            _ => None,
        }
    }

    fn handle_menu_keys(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Up | Keycode::W => Some(GameAction::MenuUp),
            Keycode::Down | Keycode::S => Some(GameAction::MenuDown),
            Keycode::Return | Keycode::Space => Some(GameAction::MenuConfirm),
            Keycode::Escape | Keycode::F1 | Keycode::Menu | Keycode::M => {
                Some(GameAction::Dismiss)
            }
            _ => None,
        }
    }

    fn handle_dialog_keys(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Return | Keycode::Space | Keycode::Escape => Some(GameAction::Dismiss),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
