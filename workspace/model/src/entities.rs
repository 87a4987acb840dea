//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the order management backend here:
//! users (with their profile category) and the orders they place.

pub mod order;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::order::Entity as Order;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    fn make_user(username: &str, category: &str) -> user::ActiveModel {
        user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(format!("{username}@example.com")),
            password_hash: Set("$argon2id$v=19$placeholder".to_string()),
            category: Set(category.to_string()),
            ..Default::default()
        }
    }

    fn make_order(title: &str, category: &str, owner_id: i32) -> order::ActiveModel {
        order::ActiveModel {
            title: Set(title.to_string()),
            description: Set(format!("{title} description")),
            category: Set(category.to_string()),
            owner_id: Set(owner_id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        // Create users in two categories
        let user1 = make_user("user1", "electronics").insert(&db).await?;
        let user2 = make_user("user2", "books").insert(&db).await?;

        // Create orders; category is independent of who placed the order
        let laptop = make_order("Laptop", "electronics", user1.id)
            .insert(&db)
            .await?;
        make_order("Novel", "books", user2.id).insert(&db).await?;
        make_order("Headphones", "electronics", user2.id)
            .insert(&db)
            .await?;

        // Verify users
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.username == "user1"));
        assert!(users.iter().any(|u| u.username == "user2"));

        // Verify orders
        let orders = Order::find().all(&db).await?;
        assert_eq!(orders.len(), 3);

        // The category filter matches across owners
        let electronics = Order::find()
            .filter(order::Column::Category.eq("electronics"))
            .all(&db)
            .await?;
        assert_eq!(electronics.len(), 2);
        assert!(electronics.iter().all(|o| o.category == "electronics"));

        // Category matching is case-sensitive
        let capitalized = Order::find()
            .filter(order::Column::Category.eq("Electronics"))
            .all(&db)
            .await?;
        assert!(capitalized.is_empty());

        // An order resolves its owner through the relation
        let owner = laptop.find_related(User).one(&db).await?;
        assert_eq!(owner.map(|u| u.id), Some(user1.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_username_and_email_are_unique() -> Result<(), DbErr> {
        let db = setup_db().await?;

        make_user("user1", "electronics").insert(&db).await?;

        // Same username, different email
        let dup_username = user::ActiveModel {
            username: Set("user1".to_string()),
            email: Set("someone-else@example.com".to_string()),
            password_hash: Set("$argon2id$v=19$placeholder".to_string()),
            category: Set("books".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(dup_username.is_err());

        // Same email, different username
        let dup_email = user::ActiveModel {
            username: Set("user2".to_string()),
            email: Set("user1@example.com".to_string()),
            password_hash: Set("$argon2id$v=19$placeholder".to_string()),
            category: Set("books".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(dup_email.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_orders() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let user1 = make_user("user1", "electronics").insert(&db).await?;
        make_order("Laptop", "electronics", user1.id)
            .insert(&db)
            .await?;

        user1.delete(&db).await?;

        let orders = Order::find().all(&db).await?;
        assert!(orders.is_empty());

        Ok(())
    }
}
