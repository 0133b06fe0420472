use super::PageService;
use crate::errors::Result;
use crate::models::attendance::requests::AttendanceQuery;
use crate::models::pages::ClassDetailPage;
use crate::models::users::entities::UserRole;
use crate::services::{AnalyticsService, ClassService};

pub async fn load(service: &PageService, role: UserRole, class_id: i64) -> Result<ClassDetailPage> {
    let classes = ClassService::new(service.storage.clone());
    let analytics = AnalyticsService::new(service.storage.clone());

    let (class, lookup, attendance, performance) = tokio::try_join!(
        classes.detail(class_id),
        service
            .gradebooks
            .get_or_initialize(service.storage.as_ref(), class_id),
        analytics.attendance_trend(AttendanceQuery::for_class(class_id)),
        analytics.performance_by_subject(class_id),
    )?;

    Ok(ClassDetailPage {
        role,
        class,
        gradebook: lookup.gradebook,
        attendance,
        performance,
    })
}
