use kurbo::{CubicBez, Line, ParamCurve, Point};

use crate::{
    outline::{NodeType, Outline},
    StitcherError,
};

/// One piece of an outline, bounded by two on-curve points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Line),
    Cubic(CubicBez),
}

impl Segment {
    /// The on-curve point the segment starts at.
    pub fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Cubic(cubic) => cubic.p0,
        }
    }

    /// The on-curve point the segment ends at.
    pub fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Cubic(cubic) => cubic.p3,
        }
    }

    /// Evaluate the segment at parameter `t` in [0, 1].
    pub fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// A fast arc length approximation.
    ///
    /// Lines are exact. Cubics use the average of the chord length and the
    /// control polygon length, which can overestimate the true arc length
    /// of a strongly curved segment by around 11%. Callers who need exact
    /// arc length want numerical integration instead; the stitching walk
    /// only uses this to decide how finely to flatten.
    pub fn length_estimate(&self) -> f64 {
        match self {
            Segment::Line(line) => line.p0.distance(line.p1),
            Segment::Cubic(cubic) => {
                let chord = cubic.p0.distance(cubic.p3);
                let polygon = cubic.p0.distance(cubic.p1)
                    + cubic.p1.distance(cubic.p2)
                    + cubic.p2.distance(cubic.p3);
                (chord + polygon) / 2.0
            }
        }
    }

    /// The same segment traversed in the opposite direction.
    pub fn reversed(&self) -> Segment {
        match self {
            Segment::Line(line) => Segment::Line(Line::new(line.p1, line.p0)),
            Segment::Cubic(cubic) => {
                Segment::Cubic(CubicBez::new(cubic.p3, cubic.p2, cubic.p1, cubic.p0))
            }
        }
    }
}

/// Reverse a segment list, giving the same geometry traversed end to start.
pub(crate) fn reverse_segments(segments: &[Segment]) -> Vec<Segment> {
    segments.iter().rev().map(Segment::reversed).collect()
}

fn malformed(reason: impl Into<String>) -> StitcherError {
    StitcherError::MalformedOutline {
        reason: reason.into(),
    }
}

impl Outline {
    /// Partition the outline into typed segments.
    ///
    /// A closed outline includes the segment connecting its final on-curve
    /// node back to its first; an open outline does not. An outline with
    /// fewer than two on-curve nodes has nothing to stitch and yields an
    /// empty list. Off-curve runs of any length other than zero (before a
    /// line node) or two (before a curve node) are malformed: this outline
    /// format only supports cubic beziers.
    pub fn segments(&self) -> Result<Vec<Segment>, StitcherError> {
        if self.on_curve_count() < 2 {
            return Ok(Vec::new());
        }
        if self.closed
            && self
                .nodes
                .iter()
                .any(|node| node.nodetype == NodeType::Move)
        {
            return Err(malformed("move node in a closed outline"));
        }
        // Rotate closed outlines so iteration starts at an on-curve node,
        // and take one extra node so trailing off-curves wrap around into
        // the closing segment.
        let rotate = if self.closed {
            self.nodes
                .iter()
                .position(|node| node.nodetype.is_on_curve())
                .unwrap_or(0)
        } else {
            0
        };
        let take = if self.closed {
            self.nodes.len() + 1
        } else {
            self.nodes.len()
        };
        let mut nodes = self.nodes.iter().cycle().skip(rotate).take(take);

        let mut current = match nodes.next() {
            Some(node) if node.nodetype.is_on_curve() => node.to_kurbo(),
            _ => return Err(malformed("outline does not start with an on-curve node")),
        };
        let mut segments = Vec::new();
        let mut pending: Vec<Point> = Vec::new();
        for node in nodes {
            match node.nodetype {
                NodeType::OffCurve => pending.push(node.to_kurbo()),
                NodeType::Move => {
                    return Err(malformed("move node after the start of the outline"))
                }
                NodeType::Line => {
                    if !pending.is_empty() {
                        return Err(malformed(format!(
                            "{} off-curve node(s) before a line node",
                            pending.len()
                        )));
                    }
                    segments.push(Segment::Line(Line::new(current, node.to_kurbo())));
                    current = node.to_kurbo();
                }
                NodeType::Curve => {
                    match pending.as_slice() {
                        [p1, p2] => segments.push(Segment::Cubic(CubicBez::new(
                            current,
                            *p1,
                            *p2,
                            node.to_kurbo(),
                        ))),
                        _ => {
                            return Err(malformed(format!(
                                "{} off-curve node(s) before a curve node",
                                pending.len()
                            )))
                        }
                    }
                    pending.clear();
                    current = node.to_kurbo();
                }
            }
        }
        if !pending.is_empty() {
            return Err(malformed(format!(
                "{} trailing off-curve node(s)",
                pending.len()
            )));
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::outline::Node;

    fn open_line() -> Outline {
        Outline {
            nodes: vec![Node::new_move(0.0, 0.0), Node::new_line(100.0, 0.0)],
            closed: false,
        }
    }

    #[test]
    fn test_open_outline_has_no_wrap_segment() {
        let segments = open_line().segments().unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start(), Point::new(0.0, 0.0));
        assert_eq!(segments[0].end(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_closed_outline_wraps() {
        let outline = Outline {
            nodes: vec![
                Node::new_line(0.0, 0.0),
                Node::new_line(100.0, 0.0),
                Node::new_line(100.0, 100.0),
                Node::new_line(0.0, 100.0),
            ],
            closed: true,
        };
        let segments = outline.segments().unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[3].start(), Point::new(0.0, 100.0));
        assert_eq!(segments[3].end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_closed_outline_rotates_to_on_curve_start() {
        // Node list starts mid-curve with the control points of the
        // segment that wraps around from the final on-curve node.
        let outline = Outline {
            nodes: vec![
                Node::new_offcurve(0.0, 55.0),
                Node::new_offcurve(45.0, 100.0),
                Node::new_curve(100.0, 100.0),
                Node::new_line(0.0, 0.0),
            ],
            closed: true,
        };
        let segments = outline.segments().unwrap();
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], Segment::Line(_)));
        assert!(matches!(segments[1], Segment::Cubic(_)));
        assert_eq!(segments[1].start(), Point::new(0.0, 0.0));
        assert_eq!(segments[1].end(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_single_offcurve_is_malformed() {
        let outline = Outline {
            nodes: vec![
                Node::new_move(0.0, 0.0),
                Node::new_offcurve(50.0, 50.0),
                Node::new_curve(100.0, 0.0),
            ],
            closed: false,
        };
        assert!(matches!(
            outline.segments(),
            Err(StitcherError::MalformedOutline { .. })
        ));
    }

    #[test]
    fn test_offcurve_before_line_is_malformed() {
        let outline = Outline {
            nodes: vec![
                Node::new_move(0.0, 0.0),
                Node::new_offcurve(50.0, 50.0),
                Node::new_line(100.0, 0.0),
            ],
            closed: false,
        };
        assert!(outline.segments().is_err());
    }

    #[test]
    fn test_trailing_offcurves_are_malformed() {
        let outline = Outline {
            nodes: vec![
                Node::new_move(0.0, 0.0),
                Node::new_line(100.0, 0.0),
                Node::new_offcurve(150.0, 50.0),
            ],
            closed: false,
        };
        assert!(outline.segments().is_err());
    }

    #[test]
    fn test_degenerate_outlines_are_empty_not_errors() {
        let one_point = Outline {
            nodes: vec![Node::new_move(10.0, 10.0)],
            closed: false,
        };
        assert!(one_point.segments().unwrap().is_empty());
        assert!(Outline::default().segments().unwrap().is_empty());
    }

    #[test]
    fn test_length_estimate() {
        let segments = open_line().segments().unwrap();
        assert_eq!(segments[0].length_estimate(), 100.0);

        let cubic = Segment::Cubic(CubicBez::new(
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 100.0),
            (100.0, 0.0),
        ));
        // chord 100, control polygon 300
        assert_eq!(cubic.length_estimate(), 200.0);
    }

    #[test]
    fn test_reversal_is_an_involution() {
        let outline = Outline {
            nodes: vec![
                Node::new_line(0.0, 0.0),
                Node::new_offcurve(0.0, 55.0),
                Node::new_offcurve(45.0, 100.0),
                Node::new_curve(100.0, 100.0),
                Node::new_line(100.0, 0.0),
            ],
            closed: true,
        };
        let segments = outline.segments().unwrap();
        let back = reverse_segments(&reverse_segments(&segments));
        assert_eq!(segments, back);
        // A reversed segment runs end to start
        let reversed = segments[0].reversed();
        assert_eq!(reversed.start(), segments[0].end());
        assert_eq!(reversed.end(), segments[0].start());
    }
}
