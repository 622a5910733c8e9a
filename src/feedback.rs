//! Transient UI Feedback
//!
//! Success toast and the back-to-top affordance.

/// Toast visibility. Every `show` bumps the generation so an expiry
/// scheduled by an earlier `show` cannot hide a newer toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Make visible and return the generation the expiry timer must present
    pub fn show(&mut self) -> u64 {
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide if `generation` is still the latest show. Returns whether it hid.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            return true;
        }
        false
    }
}

/// Back-to-top button shows strictly above the threshold
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Current vertical scroll offset of the page
pub fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Request a smooth scroll to the top of the page
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_show() {
        let mut toast = ToastState::default();
        assert!(!toast.visible);
        let gen = toast.show();
        assert!(toast.visible);
        assert!(toast.expire(gen));
        assert!(!toast.visible);
        assert!(!toast.expire(gen));
    }

    #[test]
    fn test_stale_expiry_does_not_hide_newer_toast() {
        let mut toast = ToastState::default();
        let first = toast.show();
        let second = toast.show();
        assert!(!toast.expire(first));
        assert!(toast.visible);
        assert!(toast.expire(second));
        assert!(!toast.visible);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!scroll_top_visible(0.0, 400.0));
        assert!(!scroll_top_visible(400.0, 400.0));
        assert!(scroll_top_visible(400.5, 400.0));
        assert!(scroll_top_visible(2000.0, 400.0));
    }
}
