//! People / HR KPIs.

use metricly_common::{ArrayLike, Result};

use crate::ratio::{ratio, relative_change};
use crate::reducer::validate_and_sum_n;

const HIRES: &str = "Total hires";
const EMPLOYEES: &str = "Total employees";
const ENROLLED: &str = "Total enrolled employees";
const OPERATING_COSTS: &str = "Total operating costs";
const SCHEDULED_REVIEWS: &str = "Total scheduled reviews";
const WORKING_DAYS: &str = "Total working days";
const PREVIOUS_SALARIES: &str = "Previous year salaries";

/// Average recruiting cost per hire.
pub fn cost_per_hire(
    total_recruiting_cost: impl Into<ArrayLike>,
    total_hires: impl Into<ArrayLike>,
) -> Result<f64> {
    let [cost, hires] = validate_and_sum_n([total_recruiting_cost.into(), total_hires.into()])?;
    ratio(cost, hires, HIRES)
}

/// Share of employees who left.
pub fn turnover_rate(
    total_separation: impl Into<ArrayLike>,
    total_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [separations, employees] =
        validate_and_sum_n([total_separation.into(), total_employee.into()])?;
    ratio(separations, employees, EMPLOYEES)
}

/// Share of enrolled employees who completed a course.
pub fn course_completion_rate(
    total_completed_employee: impl Into<ArrayLike>,
    total_enrolled_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [completed, enrolled] =
        validate_and_sum_n([total_completed_employee.into(), total_enrolled_employee.into()])?;
    ratio(completed, enrolled, ENROLLED)
}

/// Share of enrolled employees who passed an assessment.
pub fn assessment_pass_rate(
    total_passed_employee: impl Into<ArrayLike>,
    total_enrolled_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [passed, enrolled] =
        validate_and_sum_n([total_passed_employee.into(), total_enrolled_employee.into()])?;
    ratio(passed, enrolled, ENROLLED)
}

/// Share of operating costs spent on training.
pub fn training_spend_rate(
    total_training_spend: impl Into<ArrayLike>,
    total_operating_cost: impl Into<ArrayLike>,
) -> Result<f64> {
    let [spend, operating] =
        validate_and_sum_n([total_training_spend.into(), total_operating_cost.into()])?;
    ratio(spend, operating, OPERATING_COSTS)
}

pub fn training_cost_per_employee(
    total_training_cost: impl Into<ArrayLike>,
    total_enrolled_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [cost, enrolled] =
        validate_and_sum_n([total_training_cost.into(), total_enrolled_employee.into()])?;
    ratio(cost, enrolled, ENROLLED)
}

/// Sum of ratings divided by the number of employees rated.
pub fn average_performance_rating(
    total_performance_rating: impl Into<ArrayLike>,
    total_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [rating, employees] =
        validate_and_sum_n([total_performance_rating.into(), total_employee.into()])?;
    ratio(rating, employees, EMPLOYEES)
}

pub fn performance_review_completion_rate(
    total_completed_reviews: impl Into<ArrayLike>,
    total_scheduled_reviews: impl Into<ArrayLike>,
) -> Result<f64> {
    let [completed, scheduled] =
        validate_and_sum_n([total_completed_reviews.into(), total_scheduled_reviews.into()])?;
    ratio(completed, scheduled, SCHEDULED_REVIEWS)
}

/// Share of working days lost to absence.
pub fn absence_rate(
    total_absence_days: impl Into<ArrayLike>,
    total_working_days: impl Into<ArrayLike>,
) -> Result<f64> {
    let [absence, working] =
        validate_and_sum_n([total_absence_days.into(), total_working_days.into()])?;
    ratio(absence, working, WORKING_DAYS)
}

pub fn promotion_rate(
    total_promotion: impl Into<ArrayLike>,
    total_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [promotions, employees] =
        validate_and_sum_n([total_promotion.into(), total_employee.into()])?;
    ratio(promotions, employees, EMPLOYEES)
}

pub fn hr_to_employee_ratio(
    total_hr: impl Into<ArrayLike>,
    total_employee: impl Into<ArrayLike>,
) -> Result<f64> {
    let [hr, employees] = validate_and_sum_n([total_hr.into(), total_employee.into()])?;
    ratio(hr, employees, EMPLOYEES)
}

/// Relative change of the salary bill year over year, as a fraction.
///
/// A decrease comes out negative; the inputs themselves must still be
/// non-negative.
///
/// ```
/// use metricly_metrics::people::salary_hike;
/// assert_eq!(salary_hike([55_000], [50_000]).unwrap(), 0.1);
/// ```
pub fn salary_hike(
    current_salary: impl Into<ArrayLike>,
    previous_year_salary: impl Into<ArrayLike>,
) -> Result<f64> {
    let [current, previous] =
        validate_and_sum_n([current_salary.into(), previous_year_salary.into()])?;
    relative_change(current, previous, PREVIOUS_SALARIES)
}
