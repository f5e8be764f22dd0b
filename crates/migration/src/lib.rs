pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_all_tables;
mod m20250901_000002_add_indexes;
mod m20250901_000003_add_active_enrollment_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_all_tables::Migration),
            Box::new(m20250901_000002_add_indexes::Migration),
            Box::new(m20250901_000003_add_active_enrollment_index::Migration),
        ]
    }
}
