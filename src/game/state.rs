// Tap game model
//
// Score, time left and the started flag, plus the countdown that drives
// them. No rendering happens here; the screen turns the returned events into
// display updates.

use crate::config::GameConfig;
use crate::save::GameSnapshot;
use crate::timer::{CountdownTimer, TimerEvent};
use std::time::Duration;

/// What changed as a result of a tap or a timer advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    ScoreChanged(u32),
    TimeChanged(Duration),
    GameOver { final_score: u32 },
    Reset,
}

pub struct TapGame {
    score: u32,
    time_left: Duration,
    started: bool,
    initial_countdown: Duration,
    interval: Duration,
    timer: CountdownTimer,
}

impl TapGame {
    /// Fresh game waiting for the first tap
    pub fn new(config: &GameConfig) -> Self {
        let initial_countdown = config.initial_countdown();
        let interval = config.countdown_interval();

        TapGame {
            score: 0,
            time_left: initial_countdown,
            started: false,
            initial_countdown,
            interval,
            timer: CountdownTimer::new(initial_countdown, interval),
        }
    }

    /// Rebuilds a game from saved values.
    ///
    /// A started game resumes counting down from the saved time; its first
    /// tick arrives on the next `advance`. Saved times longer than a full game
    /// are clamped.
    pub fn restore(config: &GameConfig, snapshot: GameSnapshot) -> Self {
        let mut game = Self::new(config);
        game.score = snapshot.score;
        game.time_left = snapshot.time_left.min(game.initial_countdown);
        game.started = snapshot.started;
        game.timer = CountdownTimer::new(game.time_left, game.interval);

        if game.started {
            game.timer.start();
        }

        game
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> Duration {
        self.time_left
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Registers one tap. The first tap of a game starts the countdown.
    pub fn tap(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !self.started {
            self.timer.start();
            self.started = true;
            events.push(GameEvent::Started);
        }

        self.score = self.score.saturating_add(1);
        events.push(GameEvent::ScoreChanged(self.score));
        events
    }

    /// Drives the countdown by `dt`
    pub fn advance(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for timer_event in self.timer.advance(dt) {
            match timer_event {
                TimerEvent::Tick { remaining } => {
                    self.time_left = remaining;
                    events.push(GameEvent::TimeChanged(remaining));
                }
                TimerEvent::Finish => {
                    self.time_left = Duration::ZERO;
                    events.push(GameEvent::GameOver {
                        final_score: self.score,
                    });
                    self.reset();
                    events.push(GameEvent::Reset);
                }
            }
        }

        events
    }

    /// Stops the countdown without touching score or time
    pub fn pause(&mut self) {
        self.timer.cancel();
    }

    pub fn is_counting_down(&self) -> bool {
        self.timer.is_running()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            time_left: self.time_left,
            started: self.started,
        }
    }

    fn reset(&mut self) {
        self.score = 0;
        self.time_left = self.initial_countdown;
        self.started = false;
        self.timer = CountdownTimer::new(self.initial_countdown, self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_new_game_is_idle() {
        let mut game = TapGame::new(&config());
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_left(), Duration::from_secs(60));
        assert!(!game.is_started());

        // Nothing counts down before the first tap
        assert!(game.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(game.time_left(), Duration::from_secs(60));
    }

    #[test]
    fn test_tap_increments_by_one() {
        let mut game = TapGame::new(&config());

        let events = game.tap();
        assert_eq!(events, vec![GameEvent::Started, GameEvent::ScoreChanged(1)]);

        let events = game.tap();
        assert_eq!(events, vec![GameEvent::ScoreChanged(2)]);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_first_tap_starts_countdown_once() {
        let mut game = TapGame::new(&config());
        game.tap();
        game.advance(Duration::from_millis(2_500));
        assert_eq!(game.time_left(), Duration::from_secs(58));

        // Later taps must not restart the timer
        game.tap();
        game.advance(Duration::from_millis(600));
        assert_eq!(game.time_left(), Duration::from_secs(57));
    }

    #[test]
    fn test_timeout_resets_score() {
        let mut game = TapGame::new(&config());
        for _ in 0..17 {
            game.tap();
        }

        let events = game.advance(Duration::from_secs(61));
        assert!(events.contains(&GameEvent::GameOver { final_score: 17 }));
        assert_eq!(events.last(), Some(&GameEvent::Reset));

        assert_eq!(game.score(), 0);
        assert_eq!(game.time_left(), Duration::from_secs(60));
        assert!(!game.is_started());
    }

    #[test]
    fn test_time_only_decreases() {
        let mut game = TapGame::new(&config());
        game.tap();

        let mut last = game.time_left();
        for _ in 0..59 {
            for event in game.advance(Duration::from_millis(1_000)) {
                if let GameEvent::TimeChanged(t) = event {
                    assert!(t <= last);
                    last = t;
                }
            }
        }
        assert_eq!(last, Duration::from_secs(1));
    }

    #[test]
    fn test_tap_after_game_over_starts_new_game() {
        let mut game = TapGame::new(&config());
        game.tap();
        game.advance(Duration::from_secs(60));

        let events = game.tap();
        assert_eq!(events, vec![GameEvent::Started, GameEvent::ScoreChanged(1)]);
    }

    #[test]
    fn test_restore_started_game_resumes() {
        let snapshot = GameSnapshot {
            score: 9,
            time_left: Duration::from_millis(37_450),
            started: true,
        };
        let mut game = TapGame::restore(&config(), snapshot);
        assert_eq!(game.snapshot(), snapshot);

        let events = game.advance(Duration::ZERO);
        assert_eq!(
            events,
            vec![GameEvent::TimeChanged(Duration::from_millis(37_450))]
        );

        game.advance(Duration::from_secs(1));
        assert_eq!(game.time_left(), Duration::from_millis(36_450));
        assert_eq!(game.score(), 9);
    }

    #[test]
    fn test_restore_idle_game_waits_for_tap() {
        let snapshot = GameSnapshot {
            score: 0,
            time_left: Duration::from_secs(60),
            started: false,
        };
        let mut game = TapGame::restore(&config(), snapshot);
        assert!(game.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(game.snapshot(), snapshot);
    }

    #[test]
    fn test_restore_clamps_overlong_time() {
        let snapshot = GameSnapshot {
            score: 1,
            time_left: Duration::from_secs(600),
            started: true,
        };
        let game = TapGame::restore(&config(), snapshot);
        assert_eq!(game.time_left(), Duration::from_secs(60));
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut game = TapGame::new(&config());
        game.tap();
        game.advance(Duration::from_secs(3));
        game.pause();

        assert!(game.advance(Duration::from_secs(100)).is_empty());
        assert_eq!(game.time_left(), Duration::from_secs(57));
    }
}
