//! Response assembly: one ranking request, three comparison groups.
//!
//! Pure composition over the repository trait and the estimator; no state is
//! kept between requests and input buckets are never mutated.

use futures::future::try_join3;
use log::debug;

use crate::api::{AgeBracket, RankingRequest, RankingResponse, GENDER_ALL};
use crate::db::repository::{AggregateRepository, RepositoryResult};
use crate::services::percentile::{build_histogram, resolve_age_bracket};

/// Age bracket spanning the whole supported range, used for the overall and
/// by-gender groupings.
const FULL_AGE_RANGE: AgeBracket = AgeBracket::new(0, 99);

/// Compute the full ranking response for one request.
///
/// Resolves the athlete's age bracket, fetches the three grouping bucket
/// sets from the store, and runs the estimator once per set. The three
/// fetches are independent and issued concurrently; a failure of any one
/// fails the request.
pub async fn compute_ranking(
    repo: &dyn AggregateRepository,
    request: &RankingRequest,
) -> RepositoryResult<RankingResponse> {
    let age_bracket = resolve_age_bracket(request.age);
    let gender_code = request.gender.code();

    debug!(
        "computing ranking: distance={} gender={} age_bracket=[{},{}]",
        request.distance, gender_code, age_bracket.start, age_bracket.end
    );

    let (overall, by_gender, by_gender_age) = try_join3(
        repo.fetch_percentile_bins(
            &request.distance,
            GENDER_ALL,
            FULL_AGE_RANGE.start,
            FULL_AGE_RANGE.end,
        ),
        repo.fetch_percentile_bins(
            &request.distance,
            gender_code,
            FULL_AGE_RANGE.start,
            FULL_AGE_RANGE.end,
        ),
        repo.fetch_percentile_bins(
            &request.distance,
            gender_code,
            age_bracket.start,
            age_bracket.end,
        ),
    )
    .await?;

    Ok(RankingResponse {
        overall: build_histogram(request.record_seconds, &overall, age_bracket),
        by_gender: build_histogram(request.record_seconds, &by_gender, age_bracket),
        by_gender_age: build_histogram(request.record_seconds, &by_gender_age, age_bracket),
    })
}
