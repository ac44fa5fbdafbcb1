use glam::Vec2;

/// One spline control point: a vertex with its incoming and outgoing tangent
/// handles, both stored as offsets from the vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplinePoint {
    pub vertex: Vec2,
    pub tangent_in: Vec2,
    pub tangent_out: Vec2,
    /// Independent (split) handles rather than mirrored ones. Mirrored
    /// handles arrive already mirrored from the parameter tree, so encoding
    /// does not consult this.
    pub split: bool,
}

impl SplinePoint {
    /// A corner point with zero-length handles.
    pub fn corner(vertex: Vec2) -> Self {
        Self {
            vertex,
            tangent_in: Vec2::ZERO,
            tangent_out: Vec2::ZERO,
            split: false,
        }
    }

    pub fn smooth(vertex: Vec2, tangent: Vec2) -> Self {
        Self {
            vertex,
            tangent_in: tangent,
            tangent_out: tangent,
            split: false,
        }
    }
}

/// The control points of a spline over time: either one constant point list
/// or one full snapshot per sampled time key.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineTrack {
    Static(Vec<SplinePoint>),
    Animated(Vec<SplineFrame>),
}

/// A snapshot of all control points at one time key. Frames are kept in
/// ascending time order.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineFrame {
    pub time: f32,
    pub points: Vec<SplinePoint>,
}

/// An ordered bline: control points plus the loop flag. A closed spline
/// implicitly joins its last point back to its first; zero points is a
/// valid, degenerate spline.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub closed: bool,
    pub track: SplineTrack,
}

impl Spline {
    pub fn fixed(points: Vec<SplinePoint>, closed: bool) -> Self {
        Self {
            closed,
            track: SplineTrack::Static(points),
        }
    }

    pub fn keyed(frames: Vec<SplineFrame>, closed: bool) -> Self {
        Self {
            closed,
            track: SplineTrack::Animated(frames),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.track, SplineTrack::Animated(_))
    }

    /// Number of control points; for animated splines, at the first key.
    pub fn point_count(&self) -> usize {
        match &self.track {
            SplineTrack::Static(points) => points.len(),
            SplineTrack::Animated(frames) => frames.first().map_or(0, |f| f.points.len()),
        }
    }
}
