use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A commission (comisión) of a course
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub code: String,
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
    #[sea_orm(has_many = "super::schedule_blocks::Entity")]
    ScheduleBlocks,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::schedule_blocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleBlocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
