//! Saveable trait for state that must outlive its screen
//!
//! Anything written into an `InstanceState` before teardown implements this,
//! so the screen can be rebuilt from the bundle afterwards.

use super::bundle::InstanceState;
use super::types::*;
use std::time::Duration;

pub trait Saveable {
    /// Write this value into the bundle
    fn save_state(&self, state: &mut InstanceState) -> Result<(), StateError>;

    /// Rebuild the value from a bundle written by `save_state`
    fn restore_state(state: &InstanceState) -> Result<Self, StateError>
    where
        Self: Sized;
}

impl Saveable for GameSnapshot {
    fn save_state(&self, state: &mut InstanceState) -> Result<(), StateError> {
        let score = i32::try_from(self.score).map_err(|_| StateError::OutOfRange {
            key: KEY_SCORE.to_string(),
            value: i64::from(self.score),
        })?;
        let time_left_ms = i64::try_from(self.time_left.as_millis()).map_err(|_| {
            StateError::OutOfRange {
                key: KEY_TIME_LEFT.to_string(),
                value: i64::MAX,
            }
        })?;

        state.put_int(KEY_SCORE, score);
        state.put_long(KEY_TIME_LEFT, time_left_ms);
        state.put_bool(KEY_GAME_STARTED, self.started);
        Ok(())
    }

    fn restore_state(state: &InstanceState) -> Result<Self, StateError> {
        let score = state.get_int(KEY_SCORE)?;
        let score = u32::try_from(score).map_err(|_| StateError::OutOfRange {
            key: KEY_SCORE.to_string(),
            value: i64::from(score),
        })?;

        let time_left_ms = state.get_long(KEY_TIME_LEFT)?;
        let time_left_ms = u64::try_from(time_left_ms).map_err(|_| StateError::OutOfRange {
            key: KEY_TIME_LEFT.to_string(),
            value: time_left_ms,
        })?;

        // Score and time alone resume a running countdown
        let started = if state.contains_key(KEY_GAME_STARTED) {
            state.get_bool(KEY_GAME_STARTED)?
        } else {
            true
        };

        Ok(GameSnapshot {
            score,
            time_left: Duration::from_millis(time_left_ms),
            started,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_preserves_exact_values() {
        let snapshot = GameSnapshot {
            score: 123,
            time_left: Duration::from_millis(37_450),
            started: true,
        };

        let mut state = InstanceState::new();
        snapshot.save_state(&mut state).unwrap();

        assert_eq!(state.get_int(KEY_SCORE).unwrap(), 123);
        assert_eq!(state.get_long(KEY_TIME_LEFT).unwrap(), 37_450);
        assert_eq!(GameSnapshot::restore_state(&state).unwrap(), snapshot);
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut state = InstanceState::new();
        state.put_int(KEY_SCORE, -1);
        state.put_long(KEY_TIME_LEFT, 1000);

        assert!(matches!(
            GameSnapshot::restore_state(&state),
            Err(StateError::OutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn test_missing_started_flag_means_running() {
        let mut state = InstanceState::new();
        state.put_int(KEY_SCORE, 5);
        state.put_long(KEY_TIME_LEFT, 20_000);

        let snapshot = GameSnapshot::restore_state(&state).unwrap();
        assert!(snapshot.started);
    }

    #[test]
    fn test_missing_time_fails() {
        let mut state = InstanceState::new();
        state.put_int(KEY_SCORE, 5);

        assert!(matches!(
            GameSnapshot::restore_state(&state),
            Err(StateError::MissingKey(_))
        ));
    }
}
