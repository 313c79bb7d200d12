use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::walk::Sample;

/// Where the host should instantiate one copy of the stamped element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the element's own origin should land. When an anchor offset
    /// was supplied this is the sample point minus the offset, so that the
    /// element's anchor, not its origin, sits on the outline.
    pub position: Point,
    /// The anchor correction applied to this placement; zero when the
    /// caller supplied none.
    pub offset: Vec2,
}

/// Turn samples into placement records, applying an optional anchor offset.
pub(crate) fn emit(samples: &[Sample], anchor_offset: Option<Vec2>) -> Vec<Placement> {
    let offset = anchor_offset.unwrap_or(Vec2::ZERO);
    samples
        .iter()
        .map(|sample| Placement {
            position: sample.point - offset,
            offset,
        })
        .collect()
}
