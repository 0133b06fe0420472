use super::{PageService, option};
use crate::errors::Result;
use crate::models::campuses::requests::CampusListQuery;
use crate::models::classes::requests::ClassListQuery;
use crate::models::pages::{TeacherEditPage, TeacherFormValues};
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::users::entities::UserRole;
use crate::services::FoundExt;

pub async fn load(service: &PageService, role: UserRole, teacher_id: i64) -> Result<TeacherEditPage> {
    let storage = service.storage.as_ref();

    let (teacher, subjects, classes, campuses) = tokio::try_join!(
        storage.get_teacher_by_id(teacher_id),
        storage.list_subjects(SubjectListQuery::default()),
        storage.list_classes(ClassListQuery::default()),
        storage.list_campuses(CampusListQuery::default()),
    )?;

    let teacher = teacher.or_not_found("Teacher", teacher_id)?;

    Ok(TeacherEditPage {
        role,
        teacher_id,
        form: TeacherFormValues::from(&teacher),
        subject_options: subjects.into_iter().map(|s| option(s.id, s.name)).collect(),
        class_options: classes.into_iter().map(|c| option(c.id, c.name)).collect(),
        campus_options: campuses.into_iter().map(|c| option(c.id, c.name)).collect(),
    })
}
