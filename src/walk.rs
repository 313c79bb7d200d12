use kurbo::Point;

/// A point emitted by the arc-length walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sample {
    /// Position on the outline.
    pub point: Point,
    /// Cumulative distance along the flattened polyline at this point.
    pub distance: f64,
}

/// Walk a dense polyline and emit samples at least `spacing` apart.
///
/// The first polyline point is always emitted. Each subsequent sample is
/// the first point whose straight-line distance from the previously emitted
/// sample reaches the spacing. Whatever is left over at the end of the
/// polyline is dropped rather than forced into an extra, closer sample;
/// spreading that remainder around is the balancer's job.
pub(crate) fn walk(points: &[Point], spacing: f64) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut iter = points.iter();
    let Some(&first) = iter.next() else {
        return samples;
    };
    samples.push(Sample {
        point: first,
        distance: 0.0,
    });
    let mut travelled = 0.0;
    let mut previous = first;
    let mut last_emitted = first;
    for &point in iter {
        travelled += previous.distance(point);
        previous = point;
        if last_emitted.distance(point) >= spacing {
            samples.push(Sample {
                point,
                distance: travelled,
            });
            last_emitted = point;
        }
    }
    samples
}
