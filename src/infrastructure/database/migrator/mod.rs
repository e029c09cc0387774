//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_clients;
mod m20250301_000003_create_hotels;
mod m20250301_000004_create_room_types;
mod m20250301_000005_create_rooms;
mod m20250301_000006_create_room_photos;
mod m20250301_000007_create_reservations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_clients::Migration),
            Box::new(m20250301_000003_create_hotels::Migration),
            Box::new(m20250301_000004_create_room_types::Migration),
            Box::new(m20250301_000005_create_rooms::Migration),
            Box::new(m20250301_000006_create_room_photos::Migration),
            Box::new(m20250301_000007_create_reservations::Migration),
        ]
    }
}
