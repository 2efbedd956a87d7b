//! Featured-product rotator for the hero banner.
//!
//! The rotator shows one available product at a time and swaps it for a
//! different random one every rotation period. A swap is two-phase: the
//! current product fades out during the transition window, then the new one
//! is shown. Time is supplied by the caller, either from two timers
//! (`advance_progress` plus `rotate`/`finish_transition`) or from a single
//! clock through `tick`.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;

/// Default time each product stays on screen.
pub const DEFAULT_ROTATION: Duration = Duration::from_millis(5000);

/// Default fade-out window before the swap.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Default refresh rate of the progress indicator.
pub const DEFAULT_PROGRESS_TICK: Duration = Duration::from_millis(100);

/// Rotation timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTiming {
    rotation: Duration,
    transition: Duration,
}

impl HeroTiming {
    /// Create timings. The rotation period is at least one millisecond.
    pub fn new(rotation: Duration, transition: Duration) -> Self {
        Self {
            rotation: rotation.max(Duration::from_millis(1)),
            transition,
        }
    }

    pub fn rotation(&self) -> Duration {
        self.rotation
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION, DEFAULT_TRANSITION)
    }
}

/// What the banner is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum HeroPhase {
    /// No available products; the banner shows a loading state.
    Empty,
    /// A product is on screen.
    Displaying(Product),
    /// `from` is fading out; `to` replaces it when the window ends.
    Transitioning { from: Product, to: Product },
}

/// Notifications produced by rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroEvent {
    /// A new product was selected and the exit animation started.
    TransitionStarted { from: ProductId, to: ProductId },
    /// A product is now fully on screen.
    ProductShown(ProductId),
}

/// Hero banner state machine.
#[derive(Debug, Clone)]
pub struct HeroRotator {
    candidates: Vec<Product>,
    phase: HeroPhase,
    timing: HeroTiming,
    progress_elapsed: Duration,
    transition_elapsed: Duration,
}

impl HeroRotator {
    /// Pick an initial product from the catalog's available entries.
    pub fn new<R: Rng + ?Sized>(catalog: &Catalog, timing: HeroTiming, rng: &mut R) -> Self {
        Self::with_candidates(catalog.available().cloned().collect(), timing, rng)
    }

    /// Build from an explicit candidate list. Unavailable products are dropped.
    pub fn with_candidates<R: Rng + ?Sized>(
        candidates: Vec<Product>,
        timing: HeroTiming,
        rng: &mut R,
    ) -> Self {
        let mut rotator = Self {
            candidates: candidates.into_iter().filter(|p| p.available).collect(),
            phase: HeroPhase::Empty,
            timing,
            progress_elapsed: Duration::ZERO,
            transition_elapsed: Duration::ZERO,
        };

        if let Some(product) = rotator.pick_next(rng) {
            tracing::debug!(product_id = %product.id, "hero initial product");
            rotator.phase = HeroPhase::Displaying(product);
        }
        rotator
    }

    /// Choose a random candidate, redrawing while it matches the product on
    /// screen. The exclusion is skipped when there is only one candidate.
    pub fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Product> {
        if self.candidates.is_empty() {
            return None;
        }

        let excluded = if self.candidates.len() > 1 {
            self.current().map(|p| p.id)
        } else {
            None
        };

        loop {
            let candidate = &self.candidates[rng.gen_range(0..self.candidates.len())];
            if Some(candidate.id) != excluded {
                return Some(candidate.clone());
            }
        }
    }

    /// Move the progress indicator forward. Capped at the rotation period.
    pub fn advance_progress(&mut self, elapsed: Duration) {
        if matches!(self.phase, HeroPhase::Empty) {
            return;
        }
        self.progress_elapsed = (self.progress_elapsed + elapsed).min(self.timing.rotation);
    }

    /// Select the next product and start the exit animation.
    ///
    /// Resets the progress indicator. Does nothing while empty or already
    /// transitioning.
    pub fn rotate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<HeroEvent> {
        let HeroPhase::Displaying(current) = &self.phase else {
            return None;
        };
        let from = current.clone();
        let to = self.pick_next(rng)?;

        let event = HeroEvent::TransitionStarted {
            from: from.id,
            to: to.id,
        };
        tracing::debug!(from = %from.id, to = %to.id, "hero transition started");

        self.phase = HeroPhase::Transitioning { from, to };
        self.progress_elapsed = Duration::ZERO;
        self.transition_elapsed = Duration::ZERO;
        Some(event)
    }

    /// End the exit animation and show the selected product.
    pub fn finish_transition(&mut self) -> Option<HeroEvent> {
        let phase = std::mem::replace(&mut self.phase, HeroPhase::Empty);
        match phase {
            HeroPhase::Transitioning { to, .. } => {
                let id = to.id;
                self.phase = HeroPhase::Displaying(to);
                self.transition_elapsed = Duration::ZERO;
                tracing::debug!(product_id = %id, "hero product shown");
                Some(HeroEvent::ProductShown(id))
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Drive the rotator from a single clock.
    pub fn tick<R: Rng + ?Sized>(&mut self, elapsed: Duration, rng: &mut R) -> Vec<HeroEvent> {
        let mut events = Vec::new();
        let mut remaining = elapsed;

        loop {
            match self.phase {
                HeroPhase::Empty => break,
                HeroPhase::Displaying(_) => {
                    let until_rotation = self.timing.rotation.saturating_sub(self.progress_elapsed);
                    if remaining < until_rotation {
                        self.progress_elapsed += remaining;
                        break;
                    }
                    remaining -= until_rotation;
                    match self.rotate(rng) {
                        Some(event) => events.push(event),
                        None => break,
                    }
                }
                HeroPhase::Transitioning { .. } => {
                    let until_swap = self.timing.transition.saturating_sub(self.transition_elapsed);
                    if remaining < until_swap {
                        self.transition_elapsed += remaining;
                        self.progress_elapsed += remaining;
                        break;
                    }
                    remaining -= until_swap;
                    self.progress_elapsed += until_swap;
                    events.extend(self.finish_transition());
                }
            }
        }

        events
    }

    pub fn phase(&self) -> &HeroPhase {
        &self.phase
    }

    /// Product currently on screen (the outgoing one while transitioning).
    pub fn current(&self) -> Option<&Product> {
        match &self.phase {
            HeroPhase::Empty => None,
            HeroPhase::Displaying(product) => Some(product),
            HeroPhase::Transitioning { from, .. } => Some(from),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, HeroPhase::Transitioning { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.phase, HeroPhase::Empty)
    }

    pub fn timing(&self) -> HeroTiming {
        self.timing
    }

    /// Progress toward the next rotation, 0 to 100.
    pub fn progress(&self) -> f64 {
        let ratio = self.progress_elapsed.as_secs_f64() / self.timing.rotation.as_secs_f64();
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    /// Whole seconds until the next rotation, rounded up.
    pub fn seconds_remaining(&self) -> u64 {
        let left = self.timing.rotation.saturating_sub(self.progress_elapsed);
        left.as_secs_f64().ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::sample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn products(n: u32) -> Vec<Product> {
        (1..=n).map(|id| sample(id, 1000, true)).collect()
    }

    #[test]
    fn test_empty_when_nothing_available() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(
            vec![sample(1, 1000, false)],
            HeroTiming::default(),
            &mut rng,
        );
        assert!(hero.is_empty());
        assert!(hero.tick(Duration::from_secs(60), &mut rng).is_empty());
        assert_eq!(hero.progress(), 0.0);
        assert!(hero.rotate(&mut rng).is_none());
    }

    #[test]
    fn test_initial_product_is_available() {
        let mut rng = rng();
        let mut candidates = products(3);
        candidates.push(sample(9, 1000, false));
        let hero = HeroRotator::with_candidates(candidates, HeroTiming::default(), &mut rng);
        let current = hero.current().unwrap();
        assert!(current.available);
        assert_ne!(current.id, ProductId::new(9));
    }

    #[test]
    fn test_rotation_never_repeats_product() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(3), HeroTiming::default(), &mut rng);
        for _ in 0..50 {
            let before = hero.current().unwrap().id;
            match hero.rotate(&mut rng) {
                Some(HeroEvent::TransitionStarted { from, to }) => {
                    assert_eq!(from, before);
                    assert_ne!(from, to);
                }
                other => panic!("unexpected event {:?}", other),
            }
            hero.finish_transition();
        }
    }

    #[test]
    fn test_single_candidate_repeats_without_looping() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(1), HeroTiming::default(), &mut rng);
        let event = hero.rotate(&mut rng);
        assert_eq!(
            event,
            Some(HeroEvent::TransitionStarted {
                from: ProductId::new(1),
                to: ProductId::new(1),
            })
        );
    }

    #[test]
    fn test_two_phase_transition() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(2), HeroTiming::default(), &mut rng);
        let first = hero.current().unwrap().id;

        hero.rotate(&mut rng);
        assert!(hero.is_transitioning());
        assert_eq!(hero.current().unwrap().id, first);
        assert!(hero.rotate(&mut rng).is_none());

        let shown = hero.finish_transition();
        assert!(!hero.is_transitioning());
        let second = hero.current().unwrap().id;
        assert_ne!(first, second);
        assert_eq!(shown, Some(HeroEvent::ProductShown(second)));
        assert!(hero.finish_transition().is_none());
    }

    #[test]
    fn test_progress_advances_and_resets() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(2), HeroTiming::default(), &mut rng);
        assert_eq!(hero.seconds_remaining(), 5);

        hero.advance_progress(Duration::from_millis(2500));
        assert!((hero.progress() - 50.0).abs() < 1e-9);
        assert_eq!(hero.seconds_remaining(), 3);

        hero.advance_progress(Duration::from_secs(10));
        assert_eq!(hero.progress(), 100.0);
        assert_eq!(hero.seconds_remaining(), 0);

        hero.rotate(&mut rng);
        assert_eq!(hero.progress(), 0.0);
    }

    #[test]
    fn test_tick_drives_full_cycle() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(3), HeroTiming::default(), &mut rng);

        let mut events = Vec::new();
        for _ in 0..49 {
            events.extend(hero.tick(DEFAULT_PROGRESS_TICK, &mut rng));
        }
        assert!(events.is_empty());
        assert!((hero.progress() - 98.0).abs() < 1e-9);

        events.extend(hero.tick(DEFAULT_PROGRESS_TICK, &mut rng));
        assert!(matches!(events.as_slice(), [HeroEvent::TransitionStarted { .. }]));
        assert!(hero.is_transitioning());

        for _ in 0..3 {
            events.extend(hero.tick(DEFAULT_PROGRESS_TICK, &mut rng));
        }
        assert!(matches!(events.last(), Some(HeroEvent::ProductShown(_))));
        assert!(!hero.is_transitioning());
        assert!((hero.progress() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_with_long_gap_emits_each_step() {
        let mut rng = rng();
        let mut hero = HeroRotator::with_candidates(products(3), HeroTiming::default(), &mut rng);
        let events = hero.tick(Duration::from_millis(10_000), &mut rng);
        let shown = events
            .iter()
            .filter(|e| matches!(e, HeroEvent::ProductShown(_)))
            .count();
        assert_eq!(shown, 1);
        assert_eq!(events.len(), 3);
        assert!(hero.is_transitioning());
    }
}
