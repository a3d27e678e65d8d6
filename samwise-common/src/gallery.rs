//! Per-step image carousel.

use std::time::Duration;

use crate::setup::StepImage;

/// Auto-advance period while the pointer is not over the gallery.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub index: usize,
    pub len: usize,
    pub hovered: bool,
    pub zoomed: bool,
    /// Bumped on every index change; an auto-advance timer armed for an
    /// older epoch is void.
    pub epoch: u64,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// New image set (step changed): back to the first image.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.show((self.index + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.show(self.index.checked_sub(1).unwrap_or(self.len - 1));
        }
    }

    /// Jump to `index` (dot click); out of range is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.show(index);
        }
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.epoch += 1;
    }

    /// The auto-advance timer armed at `epoch` fired. Stale timers do
    /// nothing; while hovered or zoomed the timer is re-armed instead.
    pub fn expire(&mut self, epoch: u64) {
        if epoch != self.epoch || self.len == 0 {
            return;
        }
        if self.hovered || self.zoomed {
            self.epoch += 1;
        } else {
            self.next();
        }
    }
}

/// `Step 2.3: Unverified Open`
pub fn caption(step_number: usize, image_index: usize, image: &StepImage) -> String {
    format!("Step {}.{}: {}", step_number, image_index + 1, image.alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut gallery = GalleryState::new(3);
        gallery.previous();
        assert_eq!(gallery.index, 2);
        gallery.next();
        assert_eq!(gallery.index, 0);
        gallery.next();
        gallery.next();
        gallery.next();
        assert_eq!(gallery.index, 0);
    }

    #[test]
    fn empty_gallery_stays_put() {
        let mut gallery = GalleryState::new(0);
        gallery.next();
        gallery.previous();
        gallery.expire(gallery.epoch);
        assert_eq!(gallery.index, 0);
    }

    #[test]
    fn hover_pauses_auto_advance() {
        let mut gallery = GalleryState::new(2);
        gallery.hovered = true;
        gallery.expire(gallery.epoch);
        assert_eq!(gallery.index, 0);
        gallery.hovered = false;
        gallery.expire(gallery.epoch);
        assert_eq!(gallery.index, 1);
    }

    #[test]
    fn manual_navigation_restarts_the_countdown() {
        let mut gallery = GalleryState::new(3);
        let armed = gallery.epoch;

        gallery.next();
        gallery.expire(armed);
        assert_eq!(gallery.index, 1);

        let armed = gallery.epoch;
        gallery.select(0);
        gallery.expire(armed);
        assert_eq!(gallery.index, 0);

        gallery.expire(gallery.epoch);
        assert_eq!(gallery.index, 1);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut gallery = GalleryState::new(2);
        gallery.select(5);
        assert_eq!(gallery, GalleryState::new(2));
    }

    #[test]
    fn reset_returns_to_first_image() {
        let mut gallery = GalleryState::new(4);
        gallery.next();
        gallery.hovered = true;
        gallery.reset(2);
        assert_eq!(gallery, GalleryState::new(2));
    }

    #[test]
    fn captions_number_images_from_one() {
        let image = StepImage { src: "/a.png", alt: "Unverified Open" };
        assert_eq!(caption(2, 2, &image), "Step 2.3: Unverified Open");
    }
}
