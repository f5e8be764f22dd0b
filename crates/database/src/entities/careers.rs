use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A program of study
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "careers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub department_id: Uuid,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::career_courses::Entity")]
    CareerCourses,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::career_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerCourses.def()
    }
}

// Many-to-many relationship with courses through the study plan
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::career_courses::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::career_courses::Relation::Career.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
