use thiserror::Error;

/// Failure converting one layer's parameters into a shape block.
///
/// Any error aborts that layer's conversion with no partial output; whether
/// to skip the layer or abort the whole export is the caller's call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The layer's parameter list has no entry with the expected name.
    #[error("layer has no `{name}` parameter")]
    MissingParam { name: String },

    /// The named parameter exists but holds a different kind of value.
    #[error("parameter `{name}` is not a {expected} value")]
    ParamType { name: String, expected: &'static str },

    /// The spline parameter itself switches between whole point sets over
    /// time. Only per-point animation inside a single spline is supported.
    #[error("parameter `{name}` is waypoint-animated at the parameter level, which is unsupported")]
    AnimatedSplineParam { name: String },
}
