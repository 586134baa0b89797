use bevy::prelude::*;

/// The two streamed assets gating the scene reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedAsset {
    Environment,
    Model,
}

/// Load state for one tracked asset. Lives for the process lifetime and is
/// mutated only by that asset's own load events.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetSlot {
    pub progress: f32,
    pub loaded: bool,
    pub failed: bool,
}

/// Tracks streaming progress of the two assets and arms a one-shot ready
/// signal once both complete.
///
/// All mutation happens from the main-world loading systems, in per-asset
/// event order; no locking is involved.
#[derive(Resource, Default)]
pub struct LoadTracker {
    environment: AssetSlot,
    model: AssetSlot,
    ready_consumed: bool,
}

impl LoadTracker {
    pub fn slot(&self, asset: TrackedAsset) -> &AssetSlot {
        match asset {
            TrackedAsset::Environment => &self.environment,
            TrackedAsset::Model => &self.model,
        }
    }

    fn slot_mut(&mut self, asset: TrackedAsset) -> &mut AssetSlot {
        match asset {
            TrackedAsset::Environment => &mut self.environment,
            TrackedAsset::Model => &mut self.model,
        }
    }

    /// Record a streaming progress report. Units are whatever the loader
    /// counts in; only the ratio matters. Reports with a zero total are
    /// ignored, and a completed slot keeps its forced 100.
    pub fn report_progress(&mut self, asset: TrackedAsset, loaded_units: u64, total_units: u64) {
        if total_units == 0 {
            return;
        }

        let slot = self.slot_mut(asset);
        if slot.loaded {
            return;
        }

        let percent = 100.0 * loaded_units as f32 / total_units as f32;
        slot.progress = percent.clamp(0.0, 100.0);
    }

    /// Mark an asset fully loaded. Idempotent. Forces the slot to 100 so
    /// the aggregate cannot round short of completion.
    pub fn report_complete(&mut self, asset: TrackedAsset) {
        let slot = self.slot_mut(asset);
        slot.loaded = true;
        slot.progress = 100.0;
    }

    /// Mark an asset as permanently failed. The slot never completes and
    /// the reveal never fires; there is no retry path.
    pub fn report_failure(&mut self, asset: TrackedAsset) {
        self.slot_mut(asset).failed = true;
    }

    /// Combined percentage across both slots, the value shown on the
    /// progress surface.
    pub fn aggregate_percent(&self) -> f32 {
        (self.environment.progress + self.model.progress) / 2.0
    }

    pub fn both_loaded(&self) -> bool {
        self.environment.loaded && self.model.loaded
    }

    /// One-shot ready signal: true on the first call after both assets
    /// have completed, false forever after.
    pub fn take_ready(&mut self) -> bool {
        if self.ready_consumed || !self.both_loaded() {
            return false;
        }
        self.ready_consumed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_is_mean_of_slot_progress() {
        let mut tracker = LoadTracker::default();
        tracker.report_progress(TrackedAsset::Environment, 50, 100);
        assert_eq!(tracker.aggregate_percent(), 25.0);

        tracker.report_progress(TrackedAsset::Model, 100, 100);
        assert_eq!(tracker.aggregate_percent(), 75.0);
    }

    #[test]
    fn completion_of_one_asset_does_not_reveal() {
        let mut tracker = LoadTracker::default();
        tracker.report_progress(TrackedAsset::Environment, 50, 100);
        tracker.report_complete(TrackedAsset::Model);

        assert_eq!(tracker.aggregate_percent(), 75.0);
        assert!(!tracker.both_loaded());
        assert!(!tracker.take_ready());
    }

    #[test]
    fn aggregate_forces_100_when_both_complete() {
        let mut tracker = LoadTracker::default();
        // Last byte report stops short of the total; completion forces it.
        tracker.report_progress(TrackedAsset::Environment, 99, 100);
        tracker.report_complete(TrackedAsset::Model);
        tracker.report_complete(TrackedAsset::Environment);

        assert_eq!(tracker.aggregate_percent(), 100.0);
        assert!(tracker.both_loaded());
    }

    #[test]
    fn over_reported_progress_clamps() {
        let mut tracker = LoadTracker::default();
        tracker.report_progress(TrackedAsset::Model, 150, 100);
        assert_eq!(tracker.slot(TrackedAsset::Model).progress, 100.0);
        assert!(!tracker.slot(TrackedAsset::Model).loaded);
    }

    #[test]
    fn zero_total_reports_are_ignored() {
        let mut tracker = LoadTracker::default();
        tracker.report_progress(TrackedAsset::Model, 10, 0);
        assert_eq!(tracker.slot(TrackedAsset::Model).progress, 0.0);
    }

    #[test]
    fn report_complete_is_idempotent() {
        let mut tracker = LoadTracker::default();
        tracker.report_complete(TrackedAsset::Environment);
        tracker.report_complete(TrackedAsset::Environment);
        tracker.report_complete(TrackedAsset::Environment);

        assert_eq!(tracker.slot(TrackedAsset::Environment).progress, 100.0);
        assert!(tracker.slot(TrackedAsset::Environment).loaded);
        assert!(!tracker.both_loaded());
    }

    #[test]
    fn progress_after_completion_cannot_regress() {
        let mut tracker = LoadTracker::default();
        tracker.report_complete(TrackedAsset::Model);
        tracker.report_progress(TrackedAsset::Model, 10, 100);
        assert_eq!(tracker.slot(TrackedAsset::Model).progress, 100.0);
    }

    #[test]
    fn ready_fires_exactly_once() {
        let mut tracker = LoadTracker::default();
        tracker.report_complete(TrackedAsset::Environment);
        assert!(!tracker.take_ready());

        tracker.report_complete(TrackedAsset::Model);
        assert!(tracker.take_ready());
        assert!(!tracker.take_ready());

        // Duplicate completion events after the reveal change nothing.
        tracker.report_complete(TrackedAsset::Environment);
        assert!(!tracker.take_ready());
    }

    #[test]
    fn ready_is_order_independent() {
        let mut tracker = LoadTracker::default();
        tracker.report_progress(TrackedAsset::Model, 30, 100);
        tracker.report_complete(TrackedAsset::Model);
        tracker.report_progress(TrackedAsset::Environment, 80, 100);
        tracker.report_complete(TrackedAsset::Environment);

        assert!(tracker.take_ready());
    }

    #[test]
    fn failed_asset_never_becomes_ready() {
        let mut tracker = LoadTracker::default();
        tracker.report_failure(TrackedAsset::Environment);
        tracker.report_complete(TrackedAsset::Model);

        assert!(tracker.slot(TrackedAsset::Environment).failed);
        assert!(!tracker.slot(TrackedAsset::Environment).loaded);
        assert!(!tracker.both_loaded());
        assert!(!tracker.take_ready());
    }

    #[test]
    fn aggregate_stays_within_bounds() {
        let mut tracker = LoadTracker::default();
        assert_eq!(tracker.aggregate_percent(), 0.0);

        tracker.report_progress(TrackedAsset::Environment, 1_000_000, 3);
        tracker.report_progress(TrackedAsset::Model, 150, 100);
        let aggregate = tracker.aggregate_percent();
        assert!((0.0..=100.0).contains(&aggregate));
    }
}
