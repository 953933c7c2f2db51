//! This file serves as the root for all SeaORM entity modules.
//! The data models for the game store live here: customers (`users`) and
//! catalog entries (`games`). The two tables are deliberately unrelated.

pub mod game;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::game::Entity as Game;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Apply the schema
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        // Create users
        let user1 = user::ActiveModel {
            name: Set("Alice".to_string()),
            email: Set("alice@example.com".to_string()),
            password: Set("hunter2".to_string()),
            is_active: Set(true),
            wallet_balance: Set(0),
            profile_picture: Set(None),
            created_at: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let user2 = user::ActiveModel {
            name: Set("Bob".to_string()),
            email: Set("bob@example.com".to_string()),
            password: Set("swordfish".to_string()),
            is_active: Set(false),
            wallet_balance: Set(1500),
            profile_picture: Set(Some("https://cdn.example.com/bob.png".to_string())),
            created_at: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        assert_ne!(user1.id, user2.id);

        // Create a game
        let game = game::ActiveModel {
            title: Set("Starfall".to_string()),
            description: Set("Open-world exploration".to_string()),
            developer: Set("Nova Forge".to_string()),
            publisher: Set("Nova Forge".to_string()),
            genre: Set("Adventure".to_string()),
            price: Set(5999),
            release_date: Set("2024-11-02".to_string()),
            rating: Set(0),
            cover_image: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.email == "alice@example.com"));
        assert!(users.iter().any(|u| u.email == "bob@example.com"));

        let games = Game::find().all(&db).await?;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Starfall");
        assert_eq!(games[0].price, 5999);

        // The unique index on email must reject a second Alice
        let duplicate = user::ActiveModel {
            name: Set("Alice Again".to_string()),
            email: Set("alice@example.com".to_string()),
            password: Set("hunter3".to_string()),
            is_active: Set(true),
            wallet_balance: Set(0),
            profile_picture: Set(None),
            created_at: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(duplicate.is_err());

        // Deleting a user leaves the catalog untouched
        User::delete_by_id(user1.id).exec(&db).await?;
        assert_eq!(User::find().all(&db).await?.len(), 1);
        assert_eq!(Game::find().all(&db).await?.len(), 1);
        assert_eq!(Game::find_by_id(game.id).one(&db).await?.unwrap().id, game.id);

        Ok(())
    }
}
