//! Panel resizer
//!
//! A row of [`Region`]s separated by [`Handle`]s. Dragging a handle resizes
//! the region before it; a [`Distributor`] decides how candidate sizes are
//! applied (plain clamping, or collapsing past a threshold).
//!
//! The engine knows nothing about windows or widgets: the host feeds it
//! pointer positions and reads region sizes back.

mod distributor;
mod engine;
mod notifier;
mod region;

pub use distributor::{CollapseConfig, CollapseDistributor, Distributor, FixedDistributor};
pub use engine::{HandleControl, Resizer};
pub use notifier::{LayoutChange, ResizeNotifier};
pub use region::{Handle, Orientation, Point, Region};
