#![cfg(feature = "serde")]

use hessdual::HessDual64;

fn sample() -> HessDual64 {
    let x = HessDual64::leaf(1.5, 2, 0, "x").unwrap();
    let y = HessDual64::leaf(-2.0, 2, 1, "y").unwrap();
    (&(&x * &y) / &(&y - 1.0)).with_name("ratio")
}

#[test]
fn roundtrip_json() {
    let v = sample();
    let json = serde_json::to_string(&v).unwrap();
    let back: HessDual64 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.name(), "ratio");
}

#[test]
fn roundtrip_leaf_keeps_index() {
    let x = HessDual64::leaf(3.0, 4, 2, "x").unwrap();
    let back: HessDual64 = serde_json::from_str(&serde_json::to_string(&x).unwrap()).unwrap();
    assert_eq!(back.index(), Some(2));
    assert!(back.is_leaf());
    assert_eq!(back, x);
}

#[test]
fn hessian_serialises_as_rows() {
    let x = HessDual64::leaf(2.0, 2, 0, "x").unwrap();
    let y = HessDual64::leaf(3.0, 2, 1, "y").unwrap();
    let json: serde_json::Value = serde_json::to_value(&x * &y).unwrap();
    assert_eq!(json["hess"], serde_json::json!([[0.0, 1.0], [1.0, 0.0]]));
    assert_eq!(json["grad"], serde_json::json!([3.0, 2.0]));
    assert_eq!(json["index"], serde_json::Value::Null);
}

#[test]
fn missing_name_falls_back_to_default() {
    let json = r#"{"value": 1.0, "grad": [0.0], "hess": [[0.0]]}"#;
    let v: HessDual64 = serde_json::from_str(json).unwrap();
    assert_eq!(v.name(), hessdual::hess_dual::DEFAULT_NAME);
    assert_eq!(v.index(), None);
}

#[test]
fn rejects_inconsistent_shapes() {
    let json = r#"{"value": 1.0, "grad": [0.0, 1.0], "hess": [[0.0, 0.0]]}"#;
    assert!(serde_json::from_str::<HessDual64>(json).is_err());

    let json = r#"{"value": 1.0, "grad": [0.0, 1.0], "hess": [[0.0, 0.0], [0.0]]}"#;
    assert!(serde_json::from_str::<HessDual64>(json).is_err());
}

#[test]
fn rejects_out_of_range_index() {
    let json = r#"{"value": 1.0, "grad": [1.0], "hess": [[0.0]], "index": 1}"#;
    let err = serde_json::from_str::<HessDual64>(json).unwrap_err();
    assert!(err.to_string().contains("leaf index 1 out of range"));
}

#[test]
fn rejects_leaf_with_seeded_derivatives_altered() {
    let json = r#"{"value": 1.0, "grad": [5.0, 7.0], "hess": [[0.0, 0.0], [0.0, 0.0]], "index": 0}"#;
    let err = serde_json::from_str::<HessDual64>(json).unwrap_err();
    assert!(err.to_string().contains("one-hot gradient"));

    let json = r#"{"value": 1.0, "grad": [1.0, 0.0], "hess": [[0.0, 2.0], [2.0, 0.0]], "index": 0}"#;
    let err = serde_json::from_str::<HessDual64>(json).unwrap_err();
    assert!(err.to_string().contains("zero hessian"));
}

#[test]
fn rejects_asymmetric_hessian() {
    let json = r#"{"value": 1.0, "grad": [5.0, 7.0], "hess": [[1.0, 2.0], [3.0, 4.0]]}"#;
    let err = serde_json::from_str::<HessDual64>(json).unwrap_err();
    assert!(err.to_string().contains("symmetric"));

    let json = r#"{"value": 1.0, "grad": [5.0, 7.0], "hess": [[1.0, 2.0], [3.0, 4.0]], "index": 0}"#;
    assert!(serde_json::from_str::<HessDual64>(json).is_err());
}

#[test]
fn division_result_roundtrips_through_validation() {
    let x = HessDual64::leaf(0.3, 3, 0, "x").unwrap();
    let y = HessDual64::leaf(-1.1, 3, 1, "y").unwrap();
    let z = HessDual64::leaf(2.9, 3, 2, "z").unwrap();
    let v = &(&(&x * &z) + &y) / &(&(&y * &z) - 4.0);
    let back: HessDual64 = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
    assert_eq!(back, v);
}
