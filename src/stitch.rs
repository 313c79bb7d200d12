use kurbo::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    balance::balance,
    flatten::dense_polyline,
    placement::{emit, Placement},
    segment::reverse_segments,
    walk::walk,
    Outline, StitcherError,
};

/// Parameters for one stitching pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StitchParams {
    /// Target distance between consecutive placements, measured along the
    /// outline.
    pub spacing: f64,
    /// Blend a forward walk with a reverse walk so the leftover remainder
    /// is spread over the whole outline instead of piling up at one end.
    #[serde(default)]
    pub balance: bool,
    /// Where the stamped element's anchor sits relative to its own origin,
    /// if the element has a meaningful reference point.
    #[serde(default)]
    pub anchor_offset: Option<Vec2>,
}

impl Default for StitchParams {
    fn default() -> Self {
        StitchParams {
            spacing: 100.0,
            balance: false,
            anchor_offset: None,
        }
    }
}

/// Sample an outline at approximately uniform arc-length intervals.
///
/// Returns one [`Placement`] per sample, or an error if the outline cannot
/// be partitioned into segments or the spacing is not a positive number.
/// Outlines too short or too sparse to stitch produce an empty or
/// single-entry list rather than an error.
pub fn stitch(outline: &Outline, params: &StitchParams) -> Result<Vec<Placement>, StitcherError> {
    if !params.spacing.is_finite() || params.spacing <= 0.0 {
        return Err(StitcherError::InvalidSpacing {
            spacing: params.spacing,
        });
    }
    let segments = outline.segments()?;
    if segments.is_empty() {
        return Ok(Vec::new());
    }
    let polyline = dense_polyline(&segments, params.spacing, outline.closed);
    let mut samples = walk(&polyline, params.spacing);
    log::debug!(
        "Walked {} segment(s) into {} sample(s)",
        segments.len(),
        samples.len()
    );
    if params.balance {
        let reversed = reverse_segments(&segments);
        let return_polyline = dense_polyline(&reversed, params.spacing, outline.closed);
        let reverse_samples = walk(&return_polyline, params.spacing);
        samples = balance(&samples, &reverse_samples, outline.closed);
    }
    Ok(emit(&samples, params.anchor_offset))
}
