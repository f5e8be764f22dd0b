use crate::{
    dtos::{
        enrollment::{
            AbsencesRequest, CourseSummary, EligibilityResponse, EnrollRequest,
            EnrollmentResponse, StatusRequest,
        },
        exam::{
            AbsentRequest, ExamRegistrationRequest, ExamRegistrationResponse, GradeRequest,
            GradeResponse,
        },
        prerequisite::{PrerequisiteRequest, PrerequisiteResponse},
        schedule::{ScheduleRequest, ScheduleResponse},
    },
    routes::{
        auth, eligibility, enrollment, exam, grading, health, prerequisite, root, schedule,
    },
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::auth,
        enrollment::enroll,
        enrollment::list_enrollments,
        enrollment::set_status,
        enrollment::record_absences,
        eligibility::evaluate,
        exam::register,
        grading::grade,
        grading::absent,
        prerequisite::list,
        prerequisite::add,
        prerequisite::remove,
        schedule::list,
        schedule::create,
        schedule::update
    ),
    components(schemas(
        EnrollRequest,
        EnrollmentResponse,
        StatusRequest,
        AbsencesRequest,
        CourseSummary,
        EligibilityResponse,
        ExamRegistrationRequest,
        ExamRegistrationResponse,
        GradeRequest,
        AbsentRequest,
        GradeResponse,
        PrerequisiteRequest,
        PrerequisiteResponse,
        ScheduleRequest,
        ScheduleResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Enrollments", description = "Course enrollment and eligibility"),
        (name = "Final exams", description = "Final-exam registration and grading"),
        (name = "Prerequisites", description = "Prerequisite graph between courses"),
        (name = "Schedules", description = "Weekly schedule blocks"),
    ),
    info(
        title = "Enrollment API",
        version = "1.0.0",
        description = "Academic enrollment rules engine",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
