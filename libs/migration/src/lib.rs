pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_pictograms;
mod m20240115_000002_create_products;
mod m20240115_000003_create_users;
mod m20240115_000004_create_trash_cans;
mod m20240115_000005_seed_demo_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_pictograms::Migration),
            Box::new(m20240115_000002_create_products::Migration),
            Box::new(m20240115_000003_create_users::Migration),
            Box::new(m20240115_000004_create_trash_cans::Migration),
            Box::new(m20240115_000005_seed_demo_data::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_unique() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 5);
    }
}
