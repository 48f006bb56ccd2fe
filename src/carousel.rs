//! Carousel Engine
//!
//! Timer-driven slide position with a progress fraction for the progress
//! bar. The view feeds it fixed-interval ticks; hidden pages don't advance.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    elapsed_ms: u32,
    slide_ms: u32,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize, slide_ms: u32) -> Self {
        Self { len, index: 0, elapsed_ms: 0, slide_ms: slide_ms.max(1), paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 0.0 ..= 1.0 through the current slide
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms as f32 / self.slide_ms as f32).min(1.0)
    }

    /// Advance the clock by `dt_ms`; returns true when the slide changed
    pub fn tick(&mut self, dt_ms: u32, visible: bool) -> bool {
        if !visible || self.paused || self.len < 2 {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.slide_ms {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.elapsed_ms = 0;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.elapsed_ms = 0;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.elapsed_ms = 0;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Item count changed (reload, admin preview edit)
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
            self.elapsed_ms = 0;
        }
    }

    pub fn set_slide_ms(&mut self, slide_ms: u32) {
        self.slide_ms = slide_ms.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_after_slide_duration_and_wraps() {
        let mut c = Carousel::new(3, 1_000);
        for _ in 0..9 {
            assert!(!c.tick(100, true));
        }
        assert!((c.progress() - 0.9).abs() < 1e-6);
        assert!(c.tick(100, true));
        assert_eq!(c.index(), 1);
        assert_eq!(c.progress(), 0.0);

        c.go_to(2);
        c.tick(1_000, true);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_hidden_page_does_not_tick() {
        let mut c = Carousel::new(3, 500);
        assert!(!c.tick(10_000, false));
        assert_eq!(c.index(), 0);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_single_slide_and_pause_hold_position() {
        let mut c = Carousel::new(1, 100);
        assert!(!c.tick(1_000, true));

        let mut c = Carousel::new(2, 100);
        c.set_paused(true);
        assert!(!c.tick(1_000, true));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_manual_navigation_resets_progress() {
        let mut c = Carousel::new(4, 1_000);
        c.tick(600, true);
        c.prev();
        assert_eq!(c.index(), 3);
        assert_eq!(c.progress(), 0.0);
        c.go_to(9);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut c = Carousel::new(5, 1_000);
        c.go_to(4);
        c.resize(2);
        assert_eq!(c.index(), 0);
        c.resize(0);
        c.next();
        assert_eq!(c.index(), 0);
    }
}
