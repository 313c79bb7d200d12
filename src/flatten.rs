use kurbo::Point;

use crate::segment::Segment;

/// How many flattened points to produce per spacing interval.
///
/// The walker measures straight-line distances between flattened points,
/// so the polyline must be much denser than the target spacing for that to
/// be a good proxy for distance along the curve.
const OVERSAMPLE: usize = 10;

/// Subdivide one segment into a dense polyline.
///
/// Point density scales with the segment's estimated length divided by the
/// target spacing. A segment shorter than one spacing still produces a full
/// interval's worth of points, so the walker always has both endpoints.
pub(crate) fn flatten_segment(segment: &Segment, spacing: f64) -> Vec<Point> {
    let intervals = ((segment.length_estimate() / spacing).ceil() as usize).max(1) * OVERSAMPLE;
    let mut points = Vec::with_capacity(intervals + 1);
    // Endpoints come from the segment itself rather than evaluation, so
    // joints between consecutive segments compare bit-equal.
    points.push(segment.start());
    for i in 1..intervals {
        let t = i as f64 / intervals as f64;
        points.push(segment.eval(t));
    }
    points.push(segment.end());
    points
}

/// Flatten every segment and join the results into one polyline.
///
/// Consecutive segments share an endpoint; the duplicated joint points are
/// dropped, as is the seam duplicate at the end of a closed outline.
pub(crate) fn dense_polyline(segments: &[Segment], spacing: f64, closed: bool) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for segment in segments {
        let flattened = flatten_segment(segment, spacing);
        let skip = usize::from(points.last() == flattened.first());
        points.extend(flattened.into_iter().skip(skip));
    }
    if closed && points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
