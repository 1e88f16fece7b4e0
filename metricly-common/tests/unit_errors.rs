use metricly_common::{ErrorResponse, MetricError};

#[test]
fn test_type_conversion_display() {
    let err = MetricError::TypeConversion;
    assert_eq!(err.to_string(), "All inputs must be array-like and numeric.");
}

#[test]
fn test_negative_value_display() {
    let err = MetricError::NegativeValue;
    assert_eq!(err.to_string(), "Inputs must not contain negative values.");
}

#[test]
fn test_division_guard_display() {
    let err = MetricError::DivisionGuard("Total hires".to_string());
    assert_eq!(err.to_string(), "Total hires must be greater than zero.");
}

#[test]
fn test_arity_display() {
    let err = MetricError::Arity { formula: "cost_per_mile".to_string(), expected: 2, actual: 3 };
    assert_eq!(err.to_string(), "cost_per_mile expects 2 inputs, got 3.");
}

#[test]
fn test_error_equality() {
    let err1 = MetricError::DivisionGuard("Total reach".to_string());
    let err2 = MetricError::DivisionGuard("Total reach".to_string());
    let err3 = MetricError::DivisionGuard("Total leads".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
    assert_ne!(MetricError::TypeConversion, MetricError::NegativeValue);
}

#[test]
fn test_error_response_envelope() {
    let err = MetricError::DivisionGuard("Total impressions".to_string());
    let body = ErrorResponse::from(&err);
    assert_eq!(body.error, "Total impressions must be greater than zero.");

    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"error":"Total impressions must be greater than zero."}"#);
}

#[test]
fn test_error_roundtrip_json() {
    let original = MetricError::Arity { formula: "salary_hike".to_string(), expected: 2, actual: 1 };
    let json = serde_json::to_string(&original).unwrap();
    let decoded: MetricError = serde_json::from_str(&json).unwrap();
    assert_eq!(original, decoded);
}
