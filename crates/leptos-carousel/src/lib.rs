//! Leptos Carousel Utilities
//!
//! Circular carousel over a fixed list of items.
//! Shows a previous/current/next window and wraps in both directions.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Position of a visible slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    Left,
    Center,
    Right,
}

impl SlotPosition {
    /// Stable name, also usable as a CSS modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotPosition::Left => "left",
            SlotPosition::Center => "center",
            SlotPosition::Right => "right",
        }
    }

    pub fn is_center(&self) -> bool {
        matches!(self, SlotPosition::Center)
    }
}

/// One visible item tagged with its position
#[derive(Clone, Debug, PartialEq)]
pub struct Slot<T> {
    pub position: SlotPosition,
    pub item: T,
}

/// Circular index over a non-empty list
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T: Clone> Carousel<T> {
    /// Returns `None` for an empty list
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Left, center and right slots around the current index.
    /// With one item all three slots hold it; with two, left and right are the same item.
    pub fn visible_slots(&self) -> [Slot<T>; 3] {
        let len = self.items.len();
        let prev = (self.index + len - 1) % len;
        let next = (self.index + 1) % len;
        [
            self.slot(SlotPosition::Left, prev),
            self.slot(SlotPosition::Center, self.index),
            self.slot(SlotPosition::Right, next),
        ]
    }

    /// Side slots move the carousel; the center slot yields its item
    pub fn activate(&mut self, position: SlotPosition) -> Option<T> {
        match position {
            SlotPosition::Left => {
                self.previous();
                None
            }
            SlotPosition::Right => {
                self.next();
                None
            }
            SlotPosition::Center => Some(self.current().clone()),
        }
    }

    fn slot(&self, position: SlotPosition, index: usize) -> Slot<T> {
        Slot {
            position,
            item: self.items[index].clone(),
        }
    }
}

/// Create a carousel signal, falling back to `None` for an empty list
pub fn create_carousel<T>(items: Vec<T>) -> Option<RwSignal<Carousel<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    Carousel::new(items).map(RwSignal::new)
}

/// Create click handler for a visible slot
pub fn make_on_slot_click<T>(
    carousel: RwSignal<Carousel<T>>,
    position: SlotPosition,
    on_select: Callback<T>,
) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |_ev| select_slot(carousel, position, on_select)
}

/// Activate a slot; runs `on_select` only for the center slot
pub fn select_slot<T>(
    carousel: RwSignal<Carousel<T>>,
    position: SlotPosition,
    on_select: Callback<T>,
) where
    T: Clone + Send + Sync + 'static,
{
    // Run the callback outside the update so it can touch other signals freely
    let selected = carousel.try_update(|c| c.activate(position)).flatten();
    if let Some(item) = selected {
        on_select.run(item);
    }
}

/// Create handler for the previous/next arrow buttons
pub fn make_on_step<T>(
    carousel: RwSignal<Carousel<T>>,
    forward: bool,
) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |_ev| {
        carousel.update(|c| if forward { c.next() } else { c.previous() });
    }
}

/// Advance the carousel on a fixed interval until the owner is cleaned up
pub fn bind_autoplay<T>(carousel: RwSignal<Carousel<T>>, every_ms: u32)
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Interval::new(every_ms, move || {
        carousel.try_update(|c| c.next());
    });
    tracing::debug!(every_ms, "carousel autoplay started");

    let handle = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        // Dropping the interval clears it
        handle.try_update_value(|slot| slot.take());
        tracing::debug!("carousel autoplay stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect()).unwrap()
    }

    #[test]
    fn test_empty_list_has_no_carousel() {
        assert!(Carousel::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut c = numbers(3);
        c.previous();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_index_stays_in_range_and_round_trips() {
        for n in 1..=7 {
            let mut c = numbers(n);
            // Deterministic mix of moves
            for step in 0..50usize {
                let before = c.index();
                if step % 3 == 0 {
                    c.previous();
                    assert!(c.index() < n);
                    c.next();
                } else {
                    c.next();
                    assert!(c.index() < n);
                    c.previous();
                }
                assert_eq!(c.index(), before, "round trip failed for n={}", n);
                if step % 2 == 0 {
                    c.next();
                } else {
                    c.previous();
                    c.previous();
                }
                assert!(c.index() < n);
            }
        }
    }

    #[test]
    fn test_visible_slots_center_is_current() {
        let mut c = numbers(5);
        for _ in 0..12 {
            let [left, center, right] = c.visible_slots();
            assert_eq!(center.item, *c.current());
            assert_eq!(center.position, SlotPosition::Center);
            assert_eq!(left.position, SlotPosition::Left);
            assert_eq!(right.position, SlotPosition::Right);
            assert_ne!(left.item, center.item);
            assert_ne!(right.item, center.item);
            assert_ne!(left.item, right.item);
            c.next();
        }
    }

    #[test]
    fn test_visible_slots_degenerate_lists() {
        let single = numbers(1);
        let [l, c, r] = single.visible_slots();
        assert_eq!((l.item, c.item, r.item), (0, 0, 0));

        let mut pair = numbers(2);
        pair.next();
        let [l, c, r] = pair.visible_slots();
        assert_eq!(c.item, 1);
        assert_eq!(l.item, 0);
        assert_eq!(r.item, 0);
    }

    #[test]
    fn test_select_slot_runs_callback_only_for_center() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::{Arc, Mutex};

        let owner = Owner::new();
        owner.set();

        let carousel = create_carousel(vec!["a", "b", "c"]).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        let on_select = {
            let calls = calls.clone();
            let last = last.clone();
            Callback::new(move |item: &'static str| {
                calls.fetch_add(1, Ordering::SeqCst);
                *last.lock().unwrap() = Some(item);
            })
        };

        select_slot(carousel, SlotPosition::Right, on_select);
        select_slot(carousel, SlotPosition::Left, on_select);
        select_slot(carousel, SlotPosition::Left, on_select);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(carousel.with_untracked(|c| c.index()), 2);

        select_slot(carousel, SlotPosition::Center, on_select);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), Some("c"));
        assert_eq!(carousel.with_untracked(|c| c.index()), 2);
    }

    #[test]
    fn test_activate_sides_move_and_center_selects() {
        let mut c = Carousel::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(c.activate(SlotPosition::Right), None);
        assert_eq!(*c.current(), "b");
        assert_eq!(c.activate(SlotPosition::Left), None);
        assert_eq!(c.activate(SlotPosition::Left), None);
        assert_eq!(*c.current(), "c");
        assert_eq!(c.activate(SlotPosition::Center), Some("c"));
        assert_eq!(c.index(), 2);
    }
}
