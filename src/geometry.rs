//! Closed-form geometry for curved, arrow-terminated links between two
//! circular node bodies.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quadratic Bézier from the target-side boundary point back to the
/// source-side one. The path starts at the target side because the arrowhead
/// marker is anchored at the path start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkPath {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl LinkPath {
    fn point(p: Point) -> Self {
        Self {
            start: p,
            control: p,
            end: p,
        }
    }

    pub fn to_svg(&self) -> String {
        format!(
            "M{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }
}

/// Computes the curved path between two node centers.
///
/// The straight line between centers is clipped at each circle boundary
/// (fraction `radius / distance` from either end), both clip points are
/// shifted by `offset` along the unit normal so the curve clears the node
/// body, and the control point bows the curve perpendicular to the line by
/// `curvature` times the center distance components.
pub fn compute_path(
    source: Point,
    target: Point,
    radius: f64,
    curvature: f64,
    offset: f64,
) -> LinkPath {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let dr = (dx * dx + dy * dy).sqrt();

    // Coincident centers leave the direction undefined; collapse to a
    // zero-length path instead of dividing by zero.
    if dr == 0.0 {
        return LinkPath::point(source);
    }

    let t = radius / dr;
    let entry = Point::new(source.x + t * dx, source.y + t * dy);
    let exit = Point::new(target.x - t * dx, target.y - t * dy);

    let (nx, ny) = (dy / dr, -dx / dr);
    let start = Point::new(exit.x + offset * nx, exit.y + offset * ny);
    let end = Point::new(entry.x + offset * nx, entry.y + offset * ny);

    let control = Point::new(
        (entry.x + exit.x) / 2.0 - curvature * dy,
        (entry.y + exit.y) / 2.0 + curvature * dx,
    );

    LinkPath {
        start,
        control,
        end,
    }
}
