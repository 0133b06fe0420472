//! 校区、教学楼与教室

use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::campuses::{
    entities::{Building, Campus, Room},
    requests::{
        CampusListQuery, CreateBuildingRequest, CreateCampusRequest, CreateRoomRequest,
        UpdateCampusRequest,
    },
};
use crate::storage::Storage;

pub struct CampusService {
    storage: Arc<dyn Storage>,
}

impl CampusService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateCampusRequest) -> Result<Campus> {
        request.validate()?;
        self.storage.create_campus(request).await
    }

    pub async fn get(&self, id: i64) -> Result<Campus> {
        self.storage.get_campus_by_id(id).await?.or_not_found("Campus", id)
    }

    pub async fn list(&self, query: CampusListQuery) -> Result<Vec<Campus>> {
        self.storage.list_campuses(query).await
    }

    pub async fn update(&self, request: UpdateCampusRequest) -> Result<Campus> {
        request.validate()?;
        let id = request.id;
        self.storage
            .update_campus(request)
            .await?
            .or_not_found("Campus", id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_campus(id).await
    }

    pub async fn create_building(&self, request: CreateBuildingRequest) -> Result<Building> {
        request.validate()?;
        self.storage
            .get_campus_by_id(request.campus_id)
            .await?
            .or_invalid_reference("Campus", request.campus_id)?;
        self.storage.create_building(request).await
    }

    pub async fn list_buildings(&self, campus_id: i64) -> Result<Vec<Building>> {
        self.storage.list_buildings_by_campus(campus_id).await
    }

    pub async fn delete_building(&self, id: i64) -> Result<()> {
        self.storage.delete_building(id).await
    }

    pub async fn create_room(&self, request: CreateRoomRequest) -> Result<Room> {
        request.validate()?;
        self.storage
            .get_building_by_id(request.building_id)
            .await?
            .or_invalid_reference("Building", request.building_id)?;
        self.storage.create_room(request).await
    }

    pub async fn list_rooms(&self, building_id: i64) -> Result<Vec<Room>> {
        self.storage.list_rooms_by_building(building_id).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<()> {
        self.storage.delete_room(id).await
    }
}
