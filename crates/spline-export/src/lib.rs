//! Conversion of a Synfig shape layer's spline ("bline") parameter into the
//! Lottie path-shape representation.
//!
//! The entry point is [`shape::path_shape`]: given a layer's parameter list,
//! the shape's index among its siblings and a coordinate mapping, it returns
//! the populated `"sh"` block with the path encoded statically or as
//! keyframes depending on whether the source spline is time-varying. XML
//! parsing, layer dispatch and document assembly live elsewhere in the
//! exporter; everything here operates on in-memory values.

pub mod coords;
pub mod error;
pub mod index;
pub mod param;
pub mod path;
pub mod property;
pub mod shape;
pub mod spline;

pub use coords::CoordMapping;
pub use error::ExportError;
pub use index::PropertyIndexer;
pub use param::{LayerParams, Param, ParamValue, Waypoint};
pub use property::Sampled;
pub use shape::{path_shape, shape_element};
pub use spline::{Spline, SplineFrame, SplinePoint, SplineTrack};
