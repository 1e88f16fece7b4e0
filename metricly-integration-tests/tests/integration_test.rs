use metricly_common::{ArrayLike, ErrorResponse, MetricError};
use metricly_metrics::{
    marketing, people, validate_and_sum, Formula, MetricRequest, MetricResponse,
};
use serde_json::json;

// --- Reference scenarios ---

#[test]
fn test_cost_per_mile_scenario() {
    // cost 300, impressions 30000
    assert_eq!(marketing::cost_per_mile([100, 200], [10000, 20000]), Ok(10.0));
}

#[test]
fn test_click_through_rate_scenario() {
    // clicks 20, impressions 2000
    assert_eq!(marketing::click_through_rate([5, 15], [1000, 1000]), Ok(0.01));
}

#[test]
fn test_frequency_zero_numerator_scenario() {
    assert_eq!(marketing::frequency([0, 0, 0], [10, 20]), Ok(0.0));
}

#[test]
fn test_cost_per_hire_zero_hires_scenario() {
    let err = people::cost_per_hire([1000], [0]).unwrap_err();
    assert_eq!(err.to_string(), "Total hires must be greater than zero.");
}

#[test]
fn test_salary_hike_scenario() {
    assert_eq!(people::salary_hike([55000], [50000]), Ok(0.1));
}

#[test]
fn test_turnover_negative_scenario() {
    assert_eq!(people::turnover_rate([-1], [10]), Err(MetricError::NegativeValue));
}

// --- Reporting layer ---

/// A dashboard's metric definitions, as it would load them from JSON.
fn dashboard() -> serde_json::Value {
    json!([
        { "formula": "cost_per_mile", "inputs": [[120.5, 79.5], [40000, 60000]] },
        { "formula": "engagement_rate", "inputs": [[30, 20], 200] },
        { "formula": "course_completion_rate", "inputs": [[[3, 4], [5, 6]], [20, 16]] },
        { "formula": "absence_rate", "inputs": [[1, 2], []] },
        { "formula": "promotion_rate", "inputs": [[1, "two"], [40]] },
        { "formula": "hr_to_employee_ratio", "inputs": [[2]] }
    ])
}

#[test]
fn test_dashboard_requests_evaluate() {
    let requests: Vec<MetricRequest> = serde_json::from_value(dashboard()).unwrap();
    let responses: Vec<MetricResponse> = requests.iter().map(MetricRequest::respond).collect();

    assert_eq!(
        responses,
        vec![
            MetricResponse::Value { formula: Formula::CostPerMile, value: 2.0 },
            MetricResponse::Value { formula: Formula::EngagementRate, value: 0.25 },
            MetricResponse::Value { formula: Formula::CourseCompletionRate, value: 0.5 },
            MetricResponse::Error(ErrorResponse {
                error: "Total working days must be greater than zero.".to_string()
            }),
            MetricResponse::Error(ErrorResponse {
                error: "All inputs must be array-like and numeric.".to_string()
            }),
            MetricResponse::Error(ErrorResponse {
                error: "hr_to_employee_ratio expects 2 inputs, got 1.".to_string()
            }),
        ]
    );
}

#[test]
fn test_dashboard_responses_serialize() {
    let requests: Vec<MetricRequest> = serde_json::from_value(dashboard()).unwrap();
    let responses: Vec<MetricResponse> = requests.iter().map(MetricRequest::respond).collect();
    let body = serde_json::to_value(&responses).unwrap();

    assert_eq!(body[0], json!({ "formula": "cost_per_mile", "value": 2.0 }));
    assert_eq!(body[3], json!({ "error": "Total working days must be greater than zero." }));

    let decoded: Vec<MetricResponse> = serde_json::from_value(body).unwrap();
    assert_eq!(decoded, responses);
}

#[test]
fn test_request_matches_direct_call() {
    let request: MetricRequest = serde_json::from_value(json!({
        "formula": "training_spend_rate",
        "inputs": [[1200, 800], [25000, 15000]]
    }))
    .unwrap();
    assert_eq!(request.evaluate(), people::training_spend_rate([1200, 800], [25000, 15000]));
}

#[test]
fn test_validated_totals_without_a_ratio() {
    // A report that only wants clean totals per channel.
    let channels: Vec<ArrayLike> =
        serde_json::from_value(json!([[10, 20], [5.5, 4.5], true, []])).unwrap();
    assert_eq!(validate_and_sum(&channels), Ok(vec![30.0, 10.0, 1.0, 0.0]));
}

#[test]
fn test_every_formula_is_reachable_by_name() {
    for formula in Formula::ALL {
        let request: MetricRequest = serde_json::from_value(json!({
            "formula": formula.as_name(),
            "inputs": [[4, 4], [8]]
        }))
        .unwrap();
        let expected = if formula == Formula::CostPerMile {
            1000.0
        } else if formula == Formula::SalaryHike {
            0.0
        } else {
            1.0
        };
        assert_eq!(request.evaluate(), Ok(expected), "{}", formula.as_name());
    }
}

#[test]
fn test_formulas_are_callable_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|n| std::thread::spawn(move || marketing::cost_per_click(vec![n * 10; 3], vec![n; 3])))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(10.0));
    }
}
