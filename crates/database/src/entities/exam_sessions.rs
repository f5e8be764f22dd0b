use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A scheduled sitting of a course's final exam (mesa de examen)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exam_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub date: Date,
    pub location: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::exam_registrations::Entity")]
    ExamRegistrations,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::exam_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
