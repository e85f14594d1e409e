//! Time-based tweens for the HUD
//!
//! Each tween is advanced with the frame delta and exposes the value to draw
//! with. Inactive tweens report their resting value.

use std::time::Duration;

/// Progress through a fixed duration
#[derive(Debug, Clone)]
pub struct Tween {
    duration: Duration,
    elapsed: Duration,
    active: bool,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Tween {
            duration,
            elapsed: Duration::ZERO,
            active: false,
        }
    }

    /// Restarts from the beginning
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.active = true;
    }

    pub fn update(&mut self, dt: Duration) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 0.0 at start, 1.0 at the end
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Button press bounce: grows to `peak_scale` and settles back to 1.0
#[derive(Debug, Clone)]
pub struct Bounce {
    tween: Tween,
    peak_scale: f32,
}

impl Bounce {
    pub fn new() -> Self {
        Bounce {
            tween: Tween::new(Duration::from_millis(300)),
            peak_scale: 1.2,
        }
    }

    pub fn start(&mut self) {
        self.tween.start();
    }

    pub fn update(&mut self, dt: Duration) {
        self.tween.update(dt);
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.tween.is_active()
    }

    pub fn scale(&self) -> f32 {
        if !self.tween.is_active() {
            return 1.0;
        }
        // Triangle wave: 0 -> 1 -> 0 over the tween
        let p = self.tween.progress();
        let height = 1.0 - (2.0 * p - 1.0).abs();
        1.0 + (self.peak_scale - 1.0) * height
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

/// Text blink: alternates dim/bright a few times, then stays bright
#[derive(Debug, Clone)]
pub struct Blink {
    tween: Tween,
    cycles: u32,
    dim_alpha: u8,
}

impl Blink {
    pub fn new() -> Self {
        Blink {
            tween: Tween::new(Duration::from_millis(400)),
            cycles: 2,
            dim_alpha: 60,
        }
    }

    pub fn start(&mut self) {
        self.tween.start();
    }

    pub fn update(&mut self, dt: Duration) {
        self.tween.update(dt);
    }

    pub fn alpha(&self) -> u8 {
        if !self.tween.is_active() {
            return 255;
        }
        let phase = (self.tween.progress() * (self.cycles * 2) as f32) as u32;
        if phase % 2 == 0 { self.dim_alpha } else { 255 }
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear fade from transparent to opaque
#[derive(Debug, Clone)]
pub struct FadeIn {
    tween: Tween,
}

impl FadeIn {
    pub fn new(duration: Duration) -> Self {
        let mut tween = Tween::new(duration);
        tween.start();
        FadeIn { tween }
    }

    pub fn update(&mut self, dt: Duration) {
        self.tween.update(dt);
    }

    pub fn alpha(&self) -> u8 {
        (self.tween.progress() * 255.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tween_finishes() {
        let mut tween = Tween::new(ms(100));
        assert!(!tween.is_active());

        tween.start();
        tween.update(ms(50));
        assert!(tween.is_active());
        assert!((tween.progress() - 0.5).abs() < 0.01);

        tween.update(ms(80));
        assert!(!tween.is_active());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_bounce_peaks_midway() {
        let mut bounce = Bounce::new();
        assert_eq!(bounce.scale(), 1.0);

        bounce.start();
        bounce.update(ms(150));
        assert!((bounce.scale() - 1.2).abs() < 0.01);

        bounce.update(ms(200));
        assert!(!bounce.is_active());
        assert_eq!(bounce.scale(), 1.0);
    }

    #[test]
    fn test_blink_alternates_then_settles() {
        let mut blink = Blink::new();
        assert_eq!(blink.alpha(), 255);

        blink.start();
        assert_eq!(blink.alpha(), 60);
        blink.update(ms(150));
        assert_eq!(blink.alpha(), 255);
        blink.update(ms(100));
        assert_eq!(blink.alpha(), 60);

        blink.update(ms(500));
        assert_eq!(blink.alpha(), 255);
    }

    #[test]
    fn test_fade_in_reaches_opaque() {
        let mut fade = FadeIn::new(ms(300));
        assert_eq!(fade.alpha(), 0);

        fade.update(ms(150));
        assert!((120..=135).contains(&fade.alpha()));

        fade.update(ms(1000));
        assert_eq!(fade.alpha(), 255);
    }
}
