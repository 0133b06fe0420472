use tracing::info;

use super::ClassService;
use crate::errors::{DashboardError, Result};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::models::common::normalize_ids;
use crate::services::FoundExt;
use crate::storage::Storage;

/// 班级的位置关联
pub(super) struct Placement {
    pub class_group_id: i64,
    pub campus_id: i64,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
}

/// 校验班级组、校区、教学楼、教室存在，且教学楼属于校区、教室属于教学楼
pub(super) async fn check_placement(storage: &dyn Storage, placement: &Placement) -> Result<()> {
    storage
        .get_class_group_by_id(placement.class_group_id)
        .await?
        .or_invalid_reference("Class group", placement.class_group_id)?;
    storage
        .get_campus_by_id(placement.campus_id)
        .await?
        .or_invalid_reference("Campus", placement.campus_id)?;

    if let Some(building_id) = placement.building_id {
        let building = storage
            .get_building_by_id(building_id)
            .await?
            .or_invalid_reference("Building", building_id)?;
        if building.campus_id != placement.campus_id {
            return Err(DashboardError::validation(format!(
                "Building {building_id} does not belong to campus {}",
                placement.campus_id
            )));
        }
    }

    if let Some(room_id) = placement.room_id {
        let room = storage
            .get_room_by_id(room_id)
            .await?
            .or_invalid_reference("Room", room_id)?;
        if let Some(building_id) = placement.building_id
            && room.building_id != building_id
        {
            return Err(DashboardError::validation(format!(
                "Room {room_id} does not belong to building {building_id}"
            )));
        }
    }

    Ok(())
}

pub async fn create_class(service: &ClassService, mut request: CreateClassRequest) -> Result<Class> {
    request.validate()?;
    let storage = service.storage.as_ref();

    check_placement(
        storage,
        &Placement {
            class_group_id: request.class_group_id,
            campus_id: request.campus_id,
            building_id: request.building_id,
            room_id: request.room_id,
        },
    )
    .await?;

    request.teacher_ids = normalize_ids(&request.teacher_ids);
    request.subject_ids = normalize_ids(&request.subject_ids);

    for &teacher_id in &request.teacher_ids {
        storage
            .get_teacher_by_id(teacher_id)
            .await?
            .or_invalid_reference("Teacher", teacher_id)?;
    }
    for &subject_id in &request.subject_ids {
        storage
            .get_subject_by_id(subject_id)
            .await?
            .or_invalid_reference("Subject", subject_id)?;
    }

    let class = storage.create_class(request).await?;
    info!("Class {} ({}) created", class.id, class.name);
    Ok(class)
}
