use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NodeType {
    /// The start point of an open outline
    Move,
    /// An on-curve point reached from its predecessor by a straight line
    Line,
    /// A cubic control point
    OffCurve,
    /// An on-curve point reached from its predecessor by a cubic curve
    Curve,
}

impl NodeType {
    /// Whether a node of this type lies on the outline itself.
    pub fn is_on_curve(self) -> bool {
        self != NodeType::OffCurve
    }
}

/// A point in an outline, tagged with its role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub nodetype: NodeType,
}

impl Node {
    pub fn new_move(x: f64, y: f64) -> Self {
        Node {
            x,
            y,
            nodetype: NodeType::Move,
        }
    }
    pub fn new_line(x: f64, y: f64) -> Self {
        Node {
            x,
            y,
            nodetype: NodeType::Line,
        }
    }
    pub fn new_offcurve(x: f64, y: f64) -> Self {
        Node {
            x,
            y,
            nodetype: NodeType::OffCurve,
        }
    }
    pub fn new_curve(x: f64, y: f64) -> Self {
        Node {
            x,
            y,
            nodetype: NodeType::Curve,
        }
    }

    pub fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// An ordered contour of on- and off-curve nodes.
///
/// Invariant: in a closed outline the final on-curve node connects back to
/// the first, so the closing segment is implied rather than stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    #[serde(
        serialize_with = "crate::serde_helpers::serialize_nodes",
        deserialize_with = "crate::serde_helpers::deserialize_nodes"
    )]
    /// A list of nodes in the outline
    pub nodes: Vec<Node>,
    /// Whether the outline is closed
    pub closed: bool,
}

impl Outline {
    pub(crate) fn on_curve_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.nodetype.is_on_curve())
            .count()
    }
}

/// Interface for accepting a sequence of path commands.
///
/// This is the boundary with whatever host system authored the shape; hosts
/// that think in drawing commands can feed an [`OutlineBuilder`] instead of
/// assembling node lists by hand.
pub trait OutlinePen {
    /// Emit a command to begin a new outline at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64);

    /// Emit a command to close the current outline.
    fn close(&mut self);
}

/// A pen which builds outlines
///
/// ```rust
/// use stitcher::{OutlineBuilder, OutlinePen};
/// let mut pen = OutlineBuilder::new();
/// pen.move_to(0.0, 0.0);
/// pen.line_to(100.0, 0.0);
/// pen.line_to(100.0, 100.0);
/// pen.close();
/// let outlines = pen.build();
/// assert_eq!(outlines.len(), 1);
/// assert_eq!(outlines[0].nodes.len(), 3);
/// assert!(outlines[0].closed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    outlines: Vec<Outline>,
    current_outline: Option<Outline>,
}

impl OutlineBuilder {
    /// Create a new OutlineBuilder
    pub fn new() -> Self {
        Self {
            outlines: Vec::new(),
            current_outline: None,
        }
    }

    /// Build and return the outlines
    pub fn build(self) -> Vec<Outline> {
        if let Some(outline) = self.current_outline {
            let mut outlines = self.outlines;
            outlines.push(outline);
            return outlines;
        }
        self.outlines
    }

    fn current_outline_mut(&mut self) -> &mut Outline {
        if self.current_outline.is_none() {
            self.current_outline = Some(Outline::default());
        }
        #[allow(clippy::unwrap_used)] // we just checked it's Some
        self.current_outline.as_mut().unwrap()
    }
}

impl OutlinePen for OutlineBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        // Start a new outline if we have an existing one
        if let Some(outline) = self.current_outline.take() {
            self.outlines.push(outline);
        }
        self.current_outline_mut().nodes.push(Node::new_move(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current_outline_mut().nodes.push(Node::new_line(x, y));
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.current_outline_mut()
            .nodes
            .push(Node::new_offcurve(cx0, cy0));
        self.current_outline_mut()
            .nodes
            .push(Node::new_offcurve(cx1, cy1));
        self.current_outline_mut().nodes.push(Node::new_curve(x, y));
    }

    fn close(&mut self) {
        if let Some(outline) = self.current_outline.as_mut() {
            // End-of-path fixups; first, close the current outline
            outline.closed = true;
            // The first node is currently a move, but we don't want a move
            // in a closed outline. If the final node brought us back to the
            // start point, then drop the first node. Otherwise, convert it
            // to a line.
            if let Some(first_node) = outline.nodes.first() {
                if let Some(last_node) = outline.nodes.last() {
                    if first_node.x == last_node.x && first_node.y == last_node.y {
                        // Drop the first node
                        outline.nodes.remove(0);
                    } else {
                        // Convert the first node to a line
                        if let Some(first_node) = outline.nodes.first_mut() {
                            first_node.nodetype = NodeType::Line;
                        }
                    }
                }
            }
        }
    }
}
