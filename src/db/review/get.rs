use crate::{
    db::{MAX_REVIEWS, ReviewStore},
    errors::AppError,
    models::ReviewRecord,
};

pub async fn get_recent_reviews(
    store: &dyn ReviewStore,
    limit: usize,
) -> Result<Vec<ReviewRecord>, AppError> {
    let limit = limit.clamp(1, MAX_REVIEWS);
    let reviews = store.list_reviews(limit).await?;

    tracing::info!("Fetched {} reviews (limit {})", reviews.len(), limit);
    Ok(reviews)
}
