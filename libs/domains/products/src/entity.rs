//! Sea-ORM entities for the products schema.
//!
//! Private to the Postgres repository; handlers only see [`crate::models`].

pub mod product {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub slug: String,
        pub french_name: String,
        pub english_name: Option<String>,
        #[sea_orm(column_type = "Text")]
        pub description: String,
        #[sea_orm(column_type = "Text")]
        pub safety_instructions: String,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Product {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                slug: model.slug,
                french_name: model.french_name,
                english_name: model.english_name,
                description: model.description,
                safety_instructions: model.safety_instructions,
                updated_at: model.updated_at.into(),
                danger_pictograms: Vec::new(),
                obligation_pictograms: Vec::new(),
            }
        }
    }
}

pub mod pictogram {
    use crate::models::PictogramKind;
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "pictograms")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub code: String,
        pub label: String,
        pub image: String,
        pub kind: PictogramKind,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Pictogram {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                code: model.code,
                label: model.label,
                image: model.image,
                kind: model.kind,
            }
        }
    }
}

/// Join table between products and pictograms
pub mod product_pictogram {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "product_pictograms")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub product_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub pictogram_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
