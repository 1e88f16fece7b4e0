//! Marketing KPIs.
//!
//! Every function sums each input with the shared reducer, guards the
//! denominator total against zero and returns a plain ratio. Numerators may
//! legitimately total zero.

use metricly_common::{ArrayLike, Result};

use crate::config::COST_PER_MILLE_SCALE;
use crate::ratio::ratio;
use crate::reducer::validate_and_sum_n;

const IMPRESSIONS: &str = "Total impressions";
const REACH: &str = "Total reach";
const FOLLOWERS: &str = "Total followers";
const CLICKS: &str = "Total clicks";
const LEADS: &str = "Total leads";

/// Cost per mille (CPM): marketing cost per 1,000 impressions.
///
/// ```
/// use metricly_metrics::marketing::cost_per_mile;
/// assert_eq!(cost_per_mile([100, 200], [10_000, 20_000]).unwrap(), 10.0);
/// ```
pub fn cost_per_mile(
    total_marketing_cost: impl Into<ArrayLike>,
    total_impression: impl Into<ArrayLike>,
) -> Result<f64> {
    let [cost, impressions] =
        validate_and_sum_n([total_marketing_cost.into(), total_impression.into()])?;
    Ok(ratio(cost, impressions, IMPRESSIONS)? * COST_PER_MILLE_SCALE)
}

/// Average number of impressions per unique viewer.
pub fn frequency(
    total_impression: impl Into<ArrayLike>,
    total_reach: impl Into<ArrayLike>,
) -> Result<f64> {
    let [impressions, reach] = validate_and_sum_n([total_impression.into(), total_reach.into()])?;
    ratio(impressions, reach, REACH)
}

/// Share of reached viewers who recall the ad.
pub fn ad_recall_lift(
    total_ad_recall: impl Into<ArrayLike>,
    total_reach: impl Into<ArrayLike>,
) -> Result<f64> {
    let [recall, reach] = validate_and_sum_n([total_ad_recall.into(), total_reach.into()])?;
    ratio(recall, reach, REACH)
}

/// Share of reached viewers who engaged with the content.
pub fn engagement_rate(
    total_engagement: impl Into<ArrayLike>,
    total_reach: impl Into<ArrayLike>,
) -> Result<f64> {
    let [engagement, reach] = validate_and_sum_n([total_engagement.into(), total_reach.into()])?;
    ratio(engagement, reach, REACH)
}

/// Engagements per follower.
pub fn post_engagement_rate(
    total_engagement: impl Into<ArrayLike>,
    total_followers: impl Into<ArrayLike>,
) -> Result<f64> {
    let [engagement, followers] =
        validate_and_sum_n([total_engagement.into(), total_followers.into()])?;
    ratio(engagement, followers, FOLLOWERS)
}

/// Click-through rate (CTR): clicks per impression.
///
/// ```
/// use metricly_metrics::marketing::click_through_rate;
/// assert_eq!(click_through_rate([5, 15], [1000, 1000]).unwrap(), 0.01);
/// ```
pub fn click_through_rate(
    total_click: impl Into<ArrayLike>,
    total_impression: impl Into<ArrayLike>,
) -> Result<f64> {
    let [clicks, impressions] = validate_and_sum_n([total_click.into(), total_impression.into()])?;
    ratio(clicks, impressions, IMPRESSIONS)
}

/// Cost per click (CPC).
pub fn cost_per_click(
    total_marketing_cost: impl Into<ArrayLike>,
    total_click: impl Into<ArrayLike>,
) -> Result<f64> {
    let [cost, clicks] = validate_and_sum_n([total_marketing_cost.into(), total_click.into()])?;
    ratio(cost, clicks, CLICKS)
}

/// Cost per lead (CPL).
pub fn cost_per_lead(
    total_marketing_cost: impl Into<ArrayLike>,
    total_leads: impl Into<ArrayLike>,
) -> Result<f64> {
    let [cost, leads] = validate_and_sum_n([total_marketing_cost.into(), total_leads.into()])?;
    ratio(cost, leads, LEADS)
}
