//! Name-addressable catalog of every formula.
//!
//! Reporting layers pick metrics by name at runtime and carry their inputs
//! as JSON. [`Formula`] maps a name to the typed function and
//! [`MetricRequest`] / [`MetricResponse`] are the serde shapes around a call.

use metricly_common::{ArrayLike, ErrorResponse, MetricError, Result};
use serde::{Deserialize, Serialize};

use crate::{marketing, people};

type BinaryFormula = fn(ArrayLike, ArrayLike) -> Result<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Marketing,
    People,
}

/// Every formula the library exposes.
///
/// | Formula                            | Domain    | Guarded input     |
/// |------------------------------------|-----------|-------------------|
/// | CostPerMile                        | Marketing | impressions       |
/// | Frequency                          | Marketing | reach             |
/// | AdRecallLift                       | Marketing | reach             |
/// | EngagementRate                     | Marketing | reach             |
/// | PostEngagementRate                 | Marketing | followers         |
/// | ClickThroughRate                   | Marketing | impressions       |
/// | CostPerClick                       | Marketing | clicks            |
/// | CostPerLead                        | Marketing | leads             |
/// | CostPerHire                        | People    | hires             |
/// | TurnoverRate                       | People    | employees         |
/// | CourseCompletionRate               | People    | enrolled          |
/// | AssessmentPassRate                 | People    | enrolled          |
/// | TrainingSpendRate                  | People    | operating cost    |
/// | TrainingCostPerEmployee            | People    | enrolled          |
/// | AveragePerformanceRating           | People    | employees         |
/// | PerformanceReviewCompletionRate    | People    | scheduled reviews |
/// | AbsenceRate                        | People    | working days      |
/// | PromotionRate                      | People    | employees         |
/// | HrToEmployeeRatio                  | People    | employees         |
/// | SalaryHike                         | People    | previous salaries |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    CostPerMile,
    Frequency,
    AdRecallLift,
    EngagementRate,
    PostEngagementRate,
    ClickThroughRate,
    CostPerClick,
    CostPerLead,
    CostPerHire,
    TurnoverRate,
    CourseCompletionRate,
    AssessmentPassRate,
    TrainingSpendRate,
    TrainingCostPerEmployee,
    AveragePerformanceRating,
    PerformanceReviewCompletionRate,
    AbsenceRate,
    PromotionRate,
    HrToEmployeeRatio,
    SalaryHike,
}

impl Formula {
    pub const ALL: [Formula; 20] = [
        Formula::CostPerMile,
        Formula::Frequency,
        Formula::AdRecallLift,
        Formula::EngagementRate,
        Formula::PostEngagementRate,
        Formula::ClickThroughRate,
        Formula::CostPerClick,
        Formula::CostPerLead,
        Formula::CostPerHire,
        Formula::TurnoverRate,
        Formula::CourseCompletionRate,
        Formula::AssessmentPassRate,
        Formula::TrainingSpendRate,
        Formula::TrainingCostPerEmployee,
        Formula::AveragePerformanceRating,
        Formula::PerformanceReviewCompletionRate,
        Formula::AbsenceRate,
        Formula::PromotionRate,
        Formula::HrToEmployeeRatio,
        Formula::SalaryHike,
    ];

    /// Look a formula up by its function name, e.g. `"click_through_rate"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_name() == name)
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            Formula::CostPerMile => "cost_per_mile",
            Formula::Frequency => "frequency",
            Formula::AdRecallLift => "ad_recall_lift",
            Formula::EngagementRate => "engagement_rate",
            Formula::PostEngagementRate => "post_engagement_rate",
            Formula::ClickThroughRate => "click_through_rate",
            Formula::CostPerClick => "cost_per_click",
            Formula::CostPerLead => "cost_per_lead",
            Formula::CostPerHire => "cost_per_hire",
            Formula::TurnoverRate => "turnover_rate",
            Formula::CourseCompletionRate => "course_completion_rate",
            Formula::AssessmentPassRate => "assessment_pass_rate",
            Formula::TrainingSpendRate => "training_spend_rate",
            Formula::TrainingCostPerEmployee => "training_cost_per_employee",
            Formula::AveragePerformanceRating => "average_performance_rating",
            Formula::PerformanceReviewCompletionRate => "performance_review_completion_rate",
            Formula::AbsenceRate => "absence_rate",
            Formula::PromotionRate => "promotion_rate",
            Formula::HrToEmployeeRatio => "hr_to_employee_ratio",
            Formula::SalaryHike => "salary_hike",
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Formula::CostPerMile
            | Formula::Frequency
            | Formula::AdRecallLift
            | Formula::EngagementRate
            | Formula::PostEngagementRate
            | Formula::ClickThroughRate
            | Formula::CostPerClick
            | Formula::CostPerLead => Domain::Marketing,
            _ => Domain::People,
        }
    }

    /// Positional input names; the last one is always the guarded denominator.
    pub fn input_names(&self) -> [&'static str; 2] {
        match self {
            Formula::CostPerMile => ["total_marketing_cost", "total_impression"],
            Formula::Frequency => ["total_impression", "total_reach"],
            Formula::AdRecallLift => ["total_ad_recall", "total_reach"],
            Formula::EngagementRate => ["total_engagement", "total_reach"],
            Formula::PostEngagementRate => ["total_engagement", "total_followers"],
            Formula::ClickThroughRate => ["total_click", "total_impression"],
            Formula::CostPerClick => ["total_marketing_cost", "total_click"],
            Formula::CostPerLead => ["total_marketing_cost", "total_leads"],
            Formula::CostPerHire => ["total_recruiting_cost", "total_hires"],
            Formula::TurnoverRate => ["total_separation", "total_employee"],
            Formula::CourseCompletionRate => ["total_completed_employee", "total_enrolled_employee"],
            Formula::AssessmentPassRate => ["total_passed_employee", "total_enrolled_employee"],
            Formula::TrainingSpendRate => ["total_training_spend", "total_operating_cost"],
            Formula::TrainingCostPerEmployee => ["total_training_cost", "total_enrolled_employee"],
            Formula::AveragePerformanceRating => ["total_performance_rating", "total_employee"],
            Formula::PerformanceReviewCompletionRate => {
                ["total_completed_reviews", "total_scheduled_reviews"]
            }
            Formula::AbsenceRate => ["total_absence_days", "total_working_days"],
            Formula::PromotionRate => ["total_promotion", "total_employee"],
            Formula::HrToEmployeeRatio => ["total_hr", "total_employee"],
            Formula::SalaryHike => ["current_salary", "previous_year_salary"],
        }
    }

    pub fn arity(&self) -> usize {
        self.input_names().len()
    }

    fn function(&self) -> BinaryFormula {
        match self {
            Formula::CostPerMile => marketing::cost_per_mile,
            Formula::Frequency => marketing::frequency,
            Formula::AdRecallLift => marketing::ad_recall_lift,
            Formula::EngagementRate => marketing::engagement_rate,
            Formula::PostEngagementRate => marketing::post_engagement_rate,
            Formula::ClickThroughRate => marketing::click_through_rate,
            Formula::CostPerClick => marketing::cost_per_click,
            Formula::CostPerLead => marketing::cost_per_lead,
            Formula::CostPerHire => people::cost_per_hire,
            Formula::TurnoverRate => people::turnover_rate,
            Formula::CourseCompletionRate => people::course_completion_rate,
            Formula::AssessmentPassRate => people::assessment_pass_rate,
            Formula::TrainingSpendRate => people::training_spend_rate,
            Formula::TrainingCostPerEmployee => people::training_cost_per_employee,
            Formula::AveragePerformanceRating => people::average_performance_rating,
            Formula::PerformanceReviewCompletionRate => people::performance_review_completion_rate,
            Formula::AbsenceRate => people::absence_rate,
            Formula::PromotionRate => people::promotion_rate,
            Formula::HrToEmployeeRatio => people::hr_to_employee_ratio,
            Formula::SalaryHike => people::salary_hike,
        }
    }

    /// Run the formula on positional `inputs`.
    ///
    /// # Errors
    /// [`MetricError::Arity`] when `inputs` has the wrong length, otherwise
    /// whatever the formula itself returns.
    pub fn evaluate(&self, inputs: &[ArrayLike]) -> Result<f64> {
        let [numerator, denominator] = inputs else {
            return Err(MetricError::Arity {
                formula: self.as_name().to_string(),
                expected: self.arity(),
                actual: inputs.len(),
            });
        };
        (self.function())(numerator.clone(), denominator.clone())
    }
}

/// A formula invocation described as data.
///
/// ```json
/// { "formula": "cost_per_click", "inputs": [[120.0, 80.0], [40, 60]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRequest {
    pub formula: Formula,
    pub inputs: Vec<ArrayLike>,
}

impl MetricRequest {
    pub fn evaluate(&self) -> Result<f64> {
        self.formula.evaluate(&self.inputs)
    }

    /// Evaluate and wrap the outcome for serialization.
    pub fn respond(&self) -> MetricResponse {
        match self.evaluate() {
            Ok(value) => MetricResponse::Value { formula: self.formula, value },
            Err(err) => MetricResponse::Error(ErrorResponse::from(&err)),
        }
    }
}

/// Serialized outcome of a [`MetricRequest`]: either the value or the
/// `{"error": ...}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricResponse {
    Value { formula: Formula, value: f64 },
    Error(ErrorResponse),
}
