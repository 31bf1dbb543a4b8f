//! Zoom scale for the modal image view

/// How much one zoom step changes the scale factor.
pub const ZOOM_STEP: f32 = 0.2;

/// Zooming out stops once the scale is at this floor.
pub const MIN_ZOOM: f32 = 0.4;

// Float-step tolerance for the floor comparison; reachable scales are
// multiples of the step, so anything below one step is safe.
const STEP_TOLERANCE: f32 = 1e-3;

/// The zoom factor applied to the displayed image.
///
/// Owned by the application controller; there is one instance for the
/// lifetime of the app. The view multiplies the image's natural size by
/// `scale()`, which is always positive. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scale as a whole percentage, for display
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Zoom in one step; unbounded above
    pub fn zoom_in(&mut self) {
        self.scale += ZOOM_STEP;
    }

    /// Zoom out one step, only while the scale still exceeds the floor
    pub fn zoom_out(&mut self) {
        if self.scale > MIN_ZOOM + STEP_TOLERANCE {
            self.scale -= ZOOM_STEP;
        }
    }

    /// Back to 100%, regardless of prior state
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn starts_at_one() {
        assert!(approx(ZoomState::new().scale(), 1.0));
    }

    #[test]
    fn zoom_in_steps_up() {
        let mut zoom = ZoomState::new();
        zoom.zoom_in();
        assert!(approx(zoom.scale(), 1.2));
        zoom.zoom_in();
        assert!(approx(zoom.scale(), 1.4));
    }

    #[test]
    fn zoom_in_has_no_upper_bound() {
        let mut zoom = ZoomState::new();
        for _ in 0..100 {
            zoom.zoom_in();
        }
        assert!(zoom.scale() > 20.0);
    }

    #[test]
    fn zoom_out_stops_at_floor() {
        let mut zoom = ZoomState::new();
        for _ in 0..50 {
            zoom.zoom_out();
        }
        assert!(approx(zoom.scale(), MIN_ZOOM));

        // Further zoom-out attempts change nothing
        let before = zoom.scale();
        zoom.zoom_out();
        assert_eq!(zoom.scale(), before);
    }

    #[test]
    fn scale_never_drops_below_floor() {
        let mut zoom = ZoomState::new();
        for step in 0..200 {
            if step % 3 == 0 {
                zoom.zoom_in();
            } else {
                zoom.zoom_out();
            }
            assert!(zoom.scale() > MIN_ZOOM - 1e-4);
            assert!(zoom.scale() > 0.0);
        }
    }

    #[test]
    fn reset_always_returns_to_one() {
        let mut zoom = ZoomState::new();
        for _ in 0..7 {
            zoom.zoom_in();
        }
        zoom.reset();
        assert!(approx(zoom.scale(), 1.0));

        for _ in 0..7 {
            zoom.zoom_out();
        }
        zoom.reset();
        assert!(approx(zoom.scale(), 1.0));
    }

    #[test]
    fn percent_rounds_cleanly() {
        let mut zoom = ZoomState::new();
        assert_eq!(zoom.percent(), 100);
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 80);
        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 40);
    }
}
