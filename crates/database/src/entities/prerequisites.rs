use models::requisite::PrerequisiteKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A flat `course -> required_course` edge of the prerequisite graph
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub required_course_id: Uuid,
    pub kind: PrerequisiteKind,
    pub position: i32, // insertion order within (course_id, kind)
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::RequiredCourseId",
        to = "super::courses::Column::Id"
    )]
    RequiredCourse,
}

/// Follows an edge to the course it requires
pub struct RequiredCourseLink;

impl Linked for RequiredCourseLink {
    type FromEntity = Entity;
    type ToEntity = super::courses::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::RequiredCourse.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
