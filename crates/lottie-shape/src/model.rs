use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

pub type Vec2 = [f32; 2];

/// A cubic bezier contour in Lottie's parallel-list form.
///
/// `v` holds the vertices; `i` and `o` hold the in/out control handles as
/// offsets relative to the vertex at the same position. `c` joins the last
/// vertex back to the first.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BezierPath {
    #[serde(default)]
    pub c: bool,
    #[serde(default)]
    pub i: Vec<Vec2>,
    #[serde(default)]
    pub o: Vec<Vec2>,
    #[serde(default)]
    pub v: Vec<Vec2>,
}

/// An animatable property: `a` is 1 when `k` carries keyframes, 0 when it is
/// a single static value. `ix` is the property's ordinal within its owning
/// shape element.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Property<T> {
    #[serde(default)]
    pub a: u8,
    #[serde(bound(deserialize = "T: DeserializeOwned"))]
    pub k: Value<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ix: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged, bound(deserialize = "T: DeserializeOwned"))]
pub enum Value<T> {
    Animated(Vec<Keyframe<T>>),
    Static(T),
}

impl<T> Value<T> {
    pub fn is_animated(&self) -> bool {
        matches!(self, Value::Animated(_))
    }
}

/// One keyframe: the value `s` holds from time `t` until the next keyframe,
/// with optional easing handles. `h: 1` marks a hold (constant) keyframe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Keyframe<T> {
    pub t: f32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "keyframe_value"
    )]
    pub s: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u8>,
}

// Keyframe values appear both bare and wrapped in a one-element array in the
// wild; accept either.
fn keyframe_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    if let Ok(value) = serde_json::from_value(raw.clone()) {
        return Ok(Some(value));
    }
    if let Ok(mut seq) = serde_json::from_value::<Vec<T>>(raw) {
        if !seq.is_empty() {
            return Ok(Some(seq.remove(0)));
        }
    }
    Ok(None)
}

/// Keyframe easing handles, `{"x": [...], "y": [...]}` on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Easing {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

/// A path shape element (`"ty": "sh"`): an index among its sibling elements
/// and the bezier path under `ks`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    pub ix: u32,
    pub ks: Property<BezierPath>,
}

/// An element of a shape layer, discriminated by `"ty"`. Fills, strokes,
/// groups and the rest are produced by other parts of the exporter and join
/// this enum as they are ported.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "ty")]
pub enum ShapeElement {
    #[serde(rename = "sh")]
    Path(PathShape),
}
