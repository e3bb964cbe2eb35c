//! Strategies turning drag deltas into committed region sizes

use super::region::Region;

/// Policy for how a candidate size is applied to the region before a handle
///
/// The resizer computes candidates (start size plus projected delta) and
/// hands them here; the distributor decides what is applied and which
/// callbacks fire.
pub trait Distributor {
    /// A drag session opened on `region`
    fn start(&mut self, _region: &mut Region) {}

    /// Live pointer move. Returns the size the region now has.
    fn drag(&mut self, region: &mut Region, candidate: f32) -> f32;

    /// Pointer released; commit whatever the drag left behind
    fn finish(&mut self, region: &mut Region);

    /// Programmatic resize outside of a drag. Returns the applied size.
    fn resize(&mut self, region: &mut Region, size: f32) -> f32;
}

type ResizedCallback = Box<dyn FnMut(f32)>;
type CollapsedCallback = Box<dyn FnMut(bool)>;

/// Plain clamped resize
#[derive(Default)]
pub struct FixedDistributor {
    on_resized: Option<ResizedCallback>,
}

impl FixedDistributor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_resized(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_resized = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for FixedDistributor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedDistributor")
            .field("on_resized", &self.on_resized.is_some())
            .finish()
    }
}

impl Distributor for FixedDistributor {
    fn drag(&mut self, region: &mut Region, candidate: f32) -> f32 {
        region.apply(candidate)
    }

    fn finish(&mut self, region: &mut Region) {
        if let Some(on_resized) = self.on_resized.as_mut() {
            on_resized(region.size());
        }
    }

    fn resize(&mut self, region: &mut Region, size: f32) -> f32 {
        region.apply(size)
    }
}

/// Settings for [`CollapseDistributor`]
pub struct CollapseConfig {
    /// Sizes at or below this collapse the region
    pub toggle_size: f32,
    pub on_collapsed: Option<CollapsedCallback>,
    pub on_resized: Option<ResizedCallback>,
}

impl CollapseConfig {
    pub fn new(toggle_size: f32) -> Self {
        Self {
            toggle_size,
            on_collapsed: None,
            on_resized: None,
        }
    }

    pub fn on_collapsed(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_collapsed = Some(Box::new(callback));
        self
    }

    pub fn on_resized(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_resized = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for CollapseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapseConfig")
            .field("toggle_size", &self.toggle_size)
            .field("on_collapsed", &self.on_collapsed.is_some())
            .field("on_resized", &self.on_resized.is_some())
            .finish()
    }
}

/// Clamped resize that collapses the region when dragged past a threshold
///
/// While dragging, a candidate at or below `toggle_size` only marks the
/// region as "would collapse"; the collapse is committed on release.
#[derive(Debug)]
pub struct CollapseDistributor {
    config: CollapseConfig,
}

impl CollapseDistributor {
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }

    pub fn toggle_size(&self) -> f32 {
        self.config.toggle_size
    }

    fn below_threshold(&self, size: f32) -> bool {
        size <= self.config.toggle_size
    }

    fn emit_collapsed(&mut self, collapsed: bool) {
        tracing::debug!(collapsed, "region collapse state changed");
        if let Some(on_collapsed) = self.config.on_collapsed.as_mut() {
            on_collapsed(collapsed);
        }
    }

    fn emit_resized(&mut self, size: f32) {
        if let Some(on_resized) = self.config.on_resized.as_mut() {
            on_resized(size);
        }
    }
}

impl Distributor for CollapseDistributor {
    fn start(&mut self, region: &mut Region) {
        region.set_would_collapse(false);
    }

    fn drag(&mut self, region: &mut Region, candidate: f32) -> f32 {
        if !candidate.is_finite() {
            return region.size();
        }
        if self.below_threshold(candidate) {
            region.set_would_collapse(true);
            return region.size();
        }
        region.set_would_collapse(false);
        region.apply(candidate)
    }

    fn finish(&mut self, region: &mut Region) {
        if region.would_collapse() {
            if region.is_collapsed() {
                region.set_would_collapse(false);
            } else {
                region.collapse();
                self.emit_collapsed(true);
            }
            return;
        }

        self.emit_resized(region.size());
        if region.is_collapsed() {
            region.expand();
            self.emit_collapsed(false);
        }
    }

    fn resize(&mut self, region: &mut Region, size: f32) -> f32 {
        if !size.is_finite() {
            return region.size();
        }
        if self.below_threshold(size) {
            if !region.is_collapsed() {
                region.collapse();
                self.emit_collapsed(true);
            }
            return region.size();
        }

        let applied = region.apply(size);
        if region.is_collapsed() {
            region.expand();
            self.emit_collapsed(false);
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Event {
        Collapsed(bool),
        Resized(f32),
    }

    fn recording(toggle_size: f32) -> (CollapseDistributor, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let collapsed = Rc::clone(&log);
        let resized = Rc::clone(&log);
        let config = CollapseConfig::new(toggle_size)
            .on_collapsed(move |c| collapsed.borrow_mut().push(Event::Collapsed(c)))
            .on_resized(move |s| resized.borrow_mut().push(Event::Resized(s)));
        (CollapseDistributor::new(config), log)
    }

    // ========================================================================
    // FixedDistributor
    // ========================================================================

    #[test]
    fn test_fixed_clamps_and_reports() {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        let mut distributor = FixedDistributor::new().on_resized(move |s| sink.borrow_mut().push(s));
        let mut region = Region::new(300.0).with_bounds(260.0, 500.0);

        assert_eq!(distributor.drag(&mut region, 100.0), 260.0);
        assert_eq!(distributor.drag(&mut region, 420.0), 420.0);
        distributor.finish(&mut region);

        assert_eq!(*sizes.borrow(), vec![420.0]);
        assert_eq!(distributor.resize(&mut region, 900.0), 500.0);
    }

    // ========================================================================
    // CollapseDistributor
    // ========================================================================

    #[test]
    fn test_drag_below_threshold_not_committed_until_release() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0).with_bounds(260.0, 600.0);

        distributor.start(&mut region);
        assert_eq!(distributor.drag(&mut region, 150.0), 350.0);
        assert!(region.would_collapse());
        assert!(!region.is_collapsed());
        assert!(log.borrow().is_empty());

        distributor.finish(&mut region);
        assert!(region.is_collapsed());
        assert_eq!(region.size(), 0.0);
        assert_eq!(*log.borrow(), vec![Event::Collapsed(true)]);
    }

    #[test]
    fn test_drag_back_above_threshold_is_plain_resize() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0).with_bounds(260.0, 600.0);

        distributor.start(&mut region);
        distributor.drag(&mut region, 100.0);
        distributor.drag(&mut region, 240.0);
        assert!(!region.would_collapse());
        assert_eq!(region.size(), 260.0, "above threshold but below min clamps");

        distributor.finish(&mut region);
        assert_eq!(*log.borrow(), vec![Event::Resized(260.0)]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0);

        distributor.start(&mut region);
        distributor.drag(&mut region, 210.0);
        distributor.finish(&mut region);
        assert_eq!(*log.borrow(), vec![Event::Collapsed(true)]);
    }

    #[test]
    fn test_expand_by_drag_reports_resize_then_expand() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0).with_bounds(260.0, 600.0);
        distributor.resize(&mut region, 0.0);
        log.borrow_mut().clear();

        distributor.start(&mut region);
        distributor.drag(&mut region, 300.0);
        distributor.finish(&mut region);

        assert!(!region.is_collapsed());
        assert_eq!(
            *log.borrow(),
            vec![Event::Resized(300.0), Event::Collapsed(false)]
        );
    }

    #[test]
    fn test_release_collapsed_region_below_threshold_is_silent() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0);
        distributor.resize(&mut region, 0.0);
        log.borrow_mut().clear();

        distributor.start(&mut region);
        distributor.drag(&mut region, 50.0);
        distributor.finish(&mut region);

        assert!(region.is_collapsed());
        assert!(!region.would_collapse());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_explicit_resize_expands_without_resize_callback() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0).with_bounds(260.0, 600.0);

        assert_eq!(distributor.resize(&mut region, 0.0), 0.0);
        assert_eq!(distributor.resize(&mut region, 100.0), 0.0);
        assert_eq!(distributor.resize(&mut region, 400.0), 400.0);

        assert_eq!(
            *log.borrow(),
            vec![Event::Collapsed(true), Event::Collapsed(false)]
        );
    }

    #[test]
    fn test_non_finite_ignored() {
        let (mut distributor, log) = recording(210.0);
        let mut region = Region::new(350.0);

        assert_eq!(distributor.resize(&mut region, f32::NAN), 350.0);
        assert_eq!(distributor.drag(&mut region, f32::NEG_INFINITY), 350.0);
        assert!(!region.would_collapse());
        assert!(log.borrow().is_empty());
    }
}
