pub use sea_orm_migration::prelude::*;

mod m20250410_000001_create_users;
mod m20250410_000002_create_posts;
mod m20250612_000001_add_post_category_and_author;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250410_000001_create_users::Migration),
            Box::new(m20250410_000002_create_posts::Migration),
            Box::new(m20250612_000001_add_post_category_and_author::Migration),
        ]
    }
}
