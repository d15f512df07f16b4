//! Review Service - one review per client and tour

use sea_orm::*;

use crate::domain::ServiceError;
use crate::models::client::Entity as Client;
use crate::models::review::{self, Entity as Review, ReviewDto};
use crate::models::tour::Entity as Tour;
use crate::validation;

pub async fn list_reviews_for_tour(
    db: &DatabaseConnection,
    tour_id: i32,
) -> Result<Vec<review::Model>, ServiceError> {
    let reviews = Review::find()
        .filter(review::Column::TourId.eq(tour_id))
        .order_by_desc(review::Column::ReviewDate)
        .all(db)
        .await?;
    Ok(reviews)
}

pub async fn create_review(
    db: &DatabaseConnection,
    dto: ReviewDto,
) -> Result<review::Model, ServiceError> {
    validation::validate_rating(dto.rating)?;

    let txn = db.begin().await?;

    Client::find_by_id(dto.client_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Tour::find_by_id(dto.tour_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if Review::find()
        .filter(review::Column::TourId.eq(dto.tour_id))
        .filter(review::Column::ClientId.eq(dto.client_id))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "this client has already reviewed the tour".into(),
        ));
    }

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let new_review = review::ActiveModel {
        tour_id: Set(dto.tour_id),
        client_id: Set(dto.client_id),
        rating: Set(dto.rating),
        comment: Set(dto.comment),
        review_date: Set(today),
        ..Default::default()
    };
    let saved = new_review.insert(&txn).await?;
    txn.commit().await?;

    Ok(saved)
}

pub async fn delete_review(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let review = Review::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    review.delete(db).await?;
    Ok(())
}
