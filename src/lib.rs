#![deny(clippy::unwrap_used, clippy::expect_used)]

//! stitcher: place repeating elements along a curve.
//!
//! Walks an outline of line and cubic bezier segments and emits placement
//! points at approximately uniform distances along its arc length, so a
//! host application can stamp a decorative element at each point.
//!
//! ```rust
//! use stitcher::{stitch, OutlineBuilder, OutlinePen, StitchParams};
//!
//! let mut pen = OutlineBuilder::new();
//! pen.move_to(0.0, 0.0);
//! pen.line_to(100.0, 0.0);
//! pen.line_to(100.0, 100.0);
//! pen.line_to(0.0, 100.0);
//! pen.close();
//! let outlines = pen.build();
//!
//! let params = StitchParams { spacing: 25.0, ..Default::default() };
//! let placements = stitch(&outlines[0], &params)?;
//! assert_eq!(placements.len(), 16);
//! # Ok::<(), stitcher::StitcherError>(())
//! ```

mod balance;
mod error;
mod flatten;
mod outline;
mod placement;
mod segment;
mod serde_helpers;
mod stitch;
mod walk;

pub use crate::{
    error::StitcherError,
    outline::{Node, NodeType, Outline, OutlineBuilder, OutlinePen},
    placement::Placement,
    segment::Segment,
    stitch::{stitch, StitchParams},
};

// Re-export kurbo so downstream users get the same version our public
// types are built on.
pub use kurbo;
