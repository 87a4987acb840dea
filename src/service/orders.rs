//! Order operations: authenticated creation and category-scoped listing.
//!
//! Both operations take the caller's principal explicitly as
//! `Option<&Principal>`. The gate on a present principal is the dominant
//! rule here and always runs before any validation or store access.

use model::entities::order;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, info, instrument, trace, warn};

use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::validation;

/// An order creation payload after JSON extraction, before validation.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Create an order owned by the authenticated principal.
///
/// Nothing is validated and nothing is written for an unauthenticated call.
#[instrument(skip_all)]
pub async fn create_order(
    db: &DatabaseConnection,
    principal: Option<&Principal>,
    new_order: NewOrder,
) -> Result<order::Model, ApiError> {
    trace!("Entering create_order");

    let Some(principal) = principal else {
        warn!("Order creation failed: Authentication required");
        return Err(ApiError::Unauthenticated);
    };

    validation::validate_new_order(&new_order).map_err(ApiError::Validation)?;

    debug!(
        "Creating order '{}' for user {}",
        new_order.title, principal.username
    );

    let order = order::ActiveModel {
        title: Set(new_order.title),
        description: Set(new_order.description),
        category: Set(new_order.category),
        owner_id: Set(principal.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(
        "Order created successfully: {} (id {}, category {})",
        order.title, order.id, order.category
    );
    Ok(order)
}

/// List the orders whose category equals the principal's profile category.
///
/// The filter is a case-sensitive equality on the category column and
/// nothing else; ownership does not restrict visibility. Results come back
/// in the store's natural order.
#[instrument(skip_all)]
pub async fn list_orders(
    db: &DatabaseConnection,
    principal: Option<&Principal>,
) -> Result<Vec<order::Model>, ApiError> {
    trace!("Entering list_orders");

    let Some(principal) = principal else {
        warn!("Order listing failed: Authentication required");
        return Err(ApiError::Unauthenticated);
    };

    debug!("Fetching orders for user: {}", principal.username);

    let orders = order::Entity::find()
        .filter(order::Column::Category.eq(&principal.category))
        .all(db)
        .await?;

    debug!(
        "Found {} orders for category: {}",
        orders.len(),
        principal.category
    );
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{seed_user, setup_test_db};
    use model::entities::prelude::Order;

    fn new_order(title: &str, category: &str) -> NewOrder {
        NewOrder {
            title: title.to_string(),
            description: format!("{title} description"),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_order_without_principal_writes_nothing() {
        let db = setup_test_db().await;

        let result = create_order(&db, None, new_order("Laptop", "testcategory")).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));

        let orders = Order::find().all(&db).await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_without_principal_fails() {
        let db = setup_test_db().await;

        let result = list_orders(&db, None).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_create_then_list_in_own_category() {
        let db = setup_test_db().await;
        let user = seed_user(&db, "testuser", "testcategory").await;
        let principal = Principal::from(user.clone());

        let created = create_order(
            &db,
            Some(&principal),
            new_order("Laptop", "testcategory"),
        )
        .await
        .unwrap();
        assert_eq!(created.title, "Laptop");
        assert_eq!(created.owner_id, user.id);

        let listed = list_orders(&db, Some(&principal)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[tokio::test]
    async fn test_listing_filters_by_category_not_by_owner() {
        let db = setup_test_db().await;
        let caller = seed_user(&db, "caller", "testcategory").await;
        let other = seed_user(&db, "other", "othercategory").await;
        let caller_principal = Principal::from(caller);
        let other_principal = Principal::from(other);

        // Owned by the caller, matching category
        create_order(
            &db,
            Some(&caller_principal),
            new_order("First", "testcategory"),
        )
        .await
        .unwrap();
        // Owned by the caller, different category
        create_order(
            &db,
            Some(&caller_principal),
            new_order("Second", "othercategory"),
        )
        .await
        .unwrap();
        // Owned by someone else, matching category
        create_order(
            &db,
            Some(&other_principal),
            new_order("Third", "testcategory"),
        )
        .await
        .unwrap();

        let listed = list_orders(&db, Some(&caller_principal)).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(listed.len(), 2);
        assert!(titles.contains(&"First"));
        assert!(titles.contains(&"Third"));
        assert!(listed.iter().all(|o| o.category == "testcategory"));
    }

    #[tokio::test]
    async fn test_create_order_with_empty_title_is_rejected() {
        let db = setup_test_db().await;
        let user = seed_user(&db, "testuser", "testcategory").await;
        let principal = Principal::from(user);

        let result = create_order(&db, Some(&principal), new_order("", "testcategory")).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let orders = Order::find().all(&db).await.unwrap();
        assert!(orders.is_empty());
    }
}
