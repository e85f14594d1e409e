// User-facing strings

pub const APP_NAME: &str = "Tap Counter";
pub const TAP_ME: &str = "Tap me!";
pub const MENU_ABOUT: &str = "About";
pub const ABOUT_MESSAGE: &str = "Tap the button as many times as you can before the time runs out.";
pub const DISMISS_HINT: &str = "Click to close";

pub fn your_score(score: u32) -> String {
    format!("Your score: {}", score)
}

pub fn time_left(seconds: u64) -> String {
    format!("Time left: {}", seconds)
}

pub fn game_over(score: u32) -> String {
    format!("Time's up! Your score was: {}", score)
}

pub fn about_title(version: &str) -> String {
    format!("About {} {}", APP_NAME, version)
}
