//! End-to-end checks for the bline-to-Lottie path conversion: the emitted
//! block is compared against hand-written JSON fixtures.

use glam::Vec2;
use serde_json::json;
use spline_export::{
    shape_element, CoordMapping, ExportError, LayerParams, Param, ParamValue, Spline, SplineFrame,
    SplinePoint, Waypoint,
};

fn layer_with_bline(spline: Spline) -> LayerParams {
    LayerParams::new(vec![
        Param::new("z_depth", ParamValue::Real(0.0)),
        Param::new("origin", ParamValue::Vector(Vec2::ZERO)),
        Param::new("invert", ParamValue::Bool(false)),
        Param::new("bline", ParamValue::Spline(spline)),
    ])
}

#[test]
fn static_triangle_produces_the_expected_block() {
    let spline = Spline::fixed(
        vec![
            SplinePoint::corner(Vec2::new(0.0, 0.0)),
            SplinePoint::corner(Vec2::new(10.0, 0.0)),
            SplinePoint::corner(Vec2::new(10.0, 10.0)),
        ],
        false,
    );
    let params = layer_with_bline(spline);

    let element = shape_element(&params, 7, &CoordMapping::identity()).unwrap();
    let out = serde_json::to_value(&element).unwrap();

    assert_eq!(
        out,
        json!({
            "ty": "sh",
            "ix": 7,
            "ks": {
                "a": 0,
                "k": {
                    "c": false,
                    "i": [[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]],
                    "o": [[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]],
                    "v": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]
                },
                "ix": 0
            }
        })
    );
}

#[test]
fn axis_flip_is_applied_through_the_mapping() {
    let spline = Spline::fixed(vec![SplinePoint::corner(Vec2::new(4.0, 16.0))], false);
    let params = layer_with_bline(spline);

    let element = shape_element(&params, 0, &CoordMapping::flip_y(64.0)).unwrap();
    let out = serde_json::to_value(&element).unwrap();

    assert_eq!(out["ks"]["k"]["v"], json!([[4.0, 48.0]]));
}

#[test]
fn empty_spline_is_degenerate_but_not_an_error() {
    let params = layer_with_bline(Spline::fixed(Vec::new(), false));

    let element = shape_element(&params, 2, &CoordMapping::identity()).unwrap();
    let out = serde_json::to_value(&element).unwrap();

    assert_eq!(out["ks"]["k"]["v"], json!([]));
    assert_eq!(out["ks"]["k"]["i"], json!([]));
    assert_eq!(out["ks"]["k"]["o"], json!([]));
    assert_eq!(out["ks"]["k"]["c"], json!(false));
}

#[test]
fn closed_flag_survives_for_empty_and_filled_splines() {
    for points in [Vec::new(), vec![SplinePoint::corner(Vec2::ZERO)]] {
        let params = layer_with_bline(Spline::fixed(points, true));
        let element = shape_element(&params, 0, &CoordMapping::identity()).unwrap();
        let out = serde_json::to_value(&element).unwrap();
        assert_eq!(out["ks"]["k"]["c"], json!(true));
    }
}

#[test]
fn missing_bline_is_a_precondition_violation() {
    let params = LayerParams::new(vec![Param::new("color", ParamValue::Real(1.0))]);

    let err = shape_element(&params, 0, &CoordMapping::identity()).unwrap_err();
    assert_eq!(
        err,
        ExportError::MissingParam {
            name: "bline".into()
        }
    );
}

#[test]
fn outer_animated_bline_is_rejected() {
    let waypoints = vec![
        Waypoint {
            time: 0.0,
            value: Box::new(ParamValue::Spline(Spline::fixed(Vec::new(), false))),
        },
        Waypoint {
            time: 12.0,
            value: Box::new(ParamValue::Spline(Spline::fixed(Vec::new(), true))),
        },
    ];
    let params = LayerParams::new(vec![Param::new("bline", ParamValue::Animated(waypoints))]);

    let err = shape_element(&params, 0, &CoordMapping::identity()).unwrap_err();
    assert_eq!(
        err,
        ExportError::AnimatedSplineParam {
            name: "bline".into()
        }
    );
}

#[test]
fn keyed_spline_emits_keyframes_with_a_one() {
    let spline = Spline::keyed(
        vec![
            SplineFrame {
                time: 0.0,
                points: vec![
                    SplinePoint::corner(Vec2::new(0.0, 0.0)),
                    SplinePoint::corner(Vec2::new(10.0, 0.0)),
                ],
            },
            SplineFrame {
                time: 24.0,
                points: vec![
                    SplinePoint::corner(Vec2::new(0.0, 5.0)),
                    SplinePoint::corner(Vec2::new(10.0, 5.0)),
                ],
            },
        ],
        false,
    );
    let params = layer_with_bline(spline);

    let element = shape_element(&params, 1, &CoordMapping::identity()).unwrap();
    let out = serde_json::to_value(&element).unwrap();

    assert_eq!(out["ks"]["a"], json!(1));
    assert_eq!(out["ks"]["ix"], json!(0));
    let frames = out["ks"]["k"].as_array().expect("keyframe array");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["t"], json!(0.0));
    assert_eq!(frames[1]["t"], json!(24.0));
    assert_eq!(frames[1]["s"]["v"], json!([[0.0, 5.0], [10.0, 5.0]]));
}

#[test]
fn path_property_always_gets_ordinal_zero() {
    let params = layer_with_bline(Spline::fixed(
        vec![SplinePoint::smooth(Vec2::ZERO, Vec2::new(1.0, 1.0))],
        true,
    ));

    let element = shape_element(&params, 3, &CoordMapping::identity()).unwrap();
    let out = serde_json::to_value(&element).unwrap();

    assert_eq!(out["ix"], json!(3));
    assert_eq!(out["ks"]["ix"], json!(0));
}
