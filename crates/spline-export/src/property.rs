use lottie_shape::model::{Keyframe, Property, Value};

/// Per-instant samples of a property value, as produced by the geometric
/// extraction step of each encoder. Exactly one sample for a constant
/// property; animated samples are in ascending time order.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampled<T> {
    Static(T),
    Animated(Vec<(f32, T)>),
}

/// Packages sampled values into a Lottie property, deciding static versus
/// keyframed encoding. Every property encoder of a shape goes through this
/// so they all emit the same keyframe layout.
pub fn build<T>(samples: Sampled<T>, ordinal: u32) -> Property<T> {
    match samples {
        Sampled::Static(value) => Property {
            a: 0,
            k: Value::Static(value),
            ix: Some(ordinal),
        },
        Sampled::Animated(samples) => Property {
            a: 1,
            k: Value::Animated(
                samples
                    .into_iter()
                    .map(|(time, value)| Keyframe {
                        t: time,
                        s: Some(value),
                        i: None,
                        o: None,
                        h: None,
                    })
                    .collect(),
            ),
            ix: Some(ordinal),
        },
    }
}
