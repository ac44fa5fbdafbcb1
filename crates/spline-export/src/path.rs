use lottie_shape::model::{BezierPath, Property};

use crate::coords::CoordMapping;
use crate::property::{self, Sampled};
use crate::spline::{Spline, SplinePoint, SplineTrack};

/// Encodes a spline as the `ks` path property of a shape element.
///
/// The mapping is applied exactly once to every vertex and tangent; any
/// handle-length or axis convention belongs to the mapping, not to this
/// function. A static spline yields a static property, a keyed spline one
/// keyframe per frame.
pub fn encode_spline(
    spline: &Spline,
    mapping: &CoordMapping,
    ordinal: u32,
) -> Property<BezierPath> {
    let samples = match &spline.track {
        SplineTrack::Static(points) => {
            Sampled::Static(bezier_path(points, spline.closed, mapping))
        }
        SplineTrack::Animated(frames) => Sampled::Animated(
            frames
                .iter()
                .map(|frame| (frame.time, bezier_path(&frame.points, spline.closed, mapping)))
                .collect(),
        ),
    };
    property::build(samples, ordinal)
}

fn bezier_path(points: &[SplinePoint], closed: bool, mapping: &CoordMapping) -> BezierPath {
    let mut path = BezierPath {
        c: closed,
        i: Vec::with_capacity(points.len()),
        o: Vec::with_capacity(points.len()),
        v: Vec::with_capacity(points.len()),
    };
    for point in points {
        path.v.push(mapping.point(point.vertex));
        path.i.push(mapping.vector(point.tangent_in));
        path.o.push(mapping.vector(point.tangent_out));
    }
    path
}
