use glam::Vec2;

use crate::error::ExportError;
use crate::spline::Spline;

/// A single value in a layer's parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Real(f64),
    Vector(Vec2),
    Bool(bool),
    Spline(Spline),
    /// The whole value is replaced at time waypoints. For spline parameters
    /// this outer-level animation is rejected by the emitter; per-point
    /// animation lives inside [`Spline`] instead.
    Animated(Vec<Waypoint>),
}

/// One timed variant of a [`ParamValue::Animated`] parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub time: f32,
    pub value: Box<ParamValue>,
}

/// A named layer parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

impl Param {
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The ordered parameter list of one layer.
///
/// Lookups are validated: a missing or wrongly-typed entry is an error,
/// never a silent null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerParams {
    params: Vec<Param>,
}

impl LayerParams {
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }

    /// The named parameter as a spline. Waypoint animation of the parameter
    /// itself is unsupported and rejected here.
    pub fn spline(&self, name: &str) -> Result<&Spline, ExportError> {
        match self.get(name) {
            Some(ParamValue::Spline(spline)) => Ok(spline),
            Some(ParamValue::Animated(_)) => Err(ExportError::AnimatedSplineParam {
                name: name.to_owned(),
            }),
            Some(_) => Err(ExportError::ParamType {
                name: name.to_owned(),
                expected: "spline",
            }),
            None => Err(ExportError::MissingParam {
                name: name.to_owned(),
            }),
        }
    }
}
