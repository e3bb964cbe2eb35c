//! Drag engine over an ordered row of regions

use super::distributor::Distributor;
use super::region::{Handle, Point, Region};

/// State captured at pointer-down
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    handle: Handle,
    start: Point,
    start_size: f32,
    /// Start size of the following region when it is flexible
    neighbor_start: Option<f32>,
}

/// Resizes the regions either side of a handle under pointer drags
///
/// Pointer input is accepted only between [`attach`](Self::attach) and
/// [`detach`](Self::detach); at most one drag session is open at a time.
#[derive(Debug)]
pub struct Resizer<D: Distributor> {
    regions: Vec<Region>,
    handles: Vec<Handle>,
    distributor: D,
    attached: bool,
    drag: Option<DragSession>,
}

impl<D: Distributor> Resizer<D> {
    /// Handles whose index has no following region are dropped
    pub fn new(regions: Vec<Region>, handles: Vec<Handle>, distributor: D) -> Self {
        let handles = handles
            .into_iter()
            .filter(|h| {
                let valid = h.index + 1 < regions.len();
                if !valid {
                    tracing::warn!(index = h.index, "handle has no following region, ignoring");
                }
                valid
            })
            .collect();
        Self {
            regions,
            handles,
            distributor,
            attached: false,
            drag: None,
        }
    }

    pub fn attach(&mut self) {
        if !self.attached {
            tracing::trace!("resizer attached");
        }
        self.attached = true;
    }

    /// Stop accepting pointer input and drop any open drag session
    pub fn detach(&mut self) {
        if self.attached {
            tracing::trace!("resizer detached");
        }
        self.attached = false;
        self.drag = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn distributor(&self) -> &D {
        &self.distributor
    }

    /// Programmatic control of the handle at position `index`
    pub fn for_handle_at(&mut self, index: usize) -> Option<HandleControl<'_, D>> {
        let handle = *self.handles.get(index)?;
        Some(HandleControl {
            resizer: self,
            handle,
        })
    }

    /// Open a drag session on handle `index`. Returns false if ignored.
    pub fn handle_pointer_down(&mut self, index: usize, position: Point) -> bool {
        if !self.attached || self.drag.is_some() {
            return false;
        }
        let Some(handle) = self.handles.get(index).copied() else {
            return false;
        };

        let primary = handle.index;
        let neighbor_start = self
            .regions
            .get(primary + 1)
            .filter(|r| r.is_flexible())
            .map(Region::size);
        let region = &mut self.regions[primary];
        self.distributor.start(region);

        tracing::trace!(handle = index, size = region.size(), "drag started");
        self.drag = Some(DragSession {
            handle,
            start: position,
            start_size: region.size(),
            neighbor_start,
        });
        true
    }

    /// Update the open drag session. Returns false without one.
    pub fn handle_pointer_move(&mut self, position: Point) -> bool {
        if !self.attached {
            return false;
        }
        let Some(session) = self.drag else {
            return false;
        };

        let mut candidate = session.start_size + session.handle.delta(session.start, position);
        if let Some(neighbor_start) = session.neighbor_start {
            let neighbor_min = self.regions[session.handle.index + 1].min();
            candidate = candidate.min(session.start_size + neighbor_start - neighbor_min);
        }

        let primary = session.handle.index;
        self.distributor.drag(&mut self.regions[primary], candidate);
        self.rebalance(primary, session.start_size, session.neighbor_start);
        true
    }

    /// Finish the drag at `position`. Returns false without a session.
    pub fn handle_pointer_up(&mut self, position: Point) -> bool {
        if !self.handle_pointer_move(position) {
            return false;
        }
        let Some(session) = self.drag.take() else {
            return false;
        };

        let primary = session.handle.index;
        self.distributor.finish(&mut self.regions[primary]);
        self.rebalance(primary, session.start_size, session.neighbor_start);
        tracing::trace!(size = self.regions[primary].size(), "drag finished");
        true
    }

    /// Give a flexible neighbor whatever the primary region does not use
    fn rebalance(&mut self, primary: usize, start_size: f32, neighbor_start: Option<f32>) {
        if let Some(neighbor_start) = neighbor_start {
            let total = start_size + neighbor_start;
            let used = self.regions[primary].size();
            self.regions[primary + 1].absorb(total - used);
        }
    }
}

impl<D: Distributor> Drop for Resizer<D> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Returned by [`Resizer::for_handle_at`]
pub struct HandleControl<'a, D: Distributor> {
    resizer: &'a mut Resizer<D>,
    handle: Handle,
}

impl<D: Distributor> HandleControl<'_, D> {
    /// Resize the region before the handle. Returns the size applied.
    pub fn resize(self, size: f32) -> f32 {
        let primary = self.handle.index;
        let regions = &mut self.resizer.regions;
        let start_size = regions[primary].size();
        let neighbor_start = regions
            .get(primary + 1)
            .filter(|r| r.is_flexible())
            .map(Region::size);

        let mut size = size;
        if let Some(neighbor_start) = neighbor_start {
            size = size.min(start_size + neighbor_start - regions[primary + 1].min());
        }

        let applied = self.resizer.distributor.resize(&mut regions[primary], size);
        self.resizer.rebalance(primary, start_size, neighbor_start);
        applied
    }
}
