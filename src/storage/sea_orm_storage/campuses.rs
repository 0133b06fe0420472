//! 校区、教学楼与教室存储操作

use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::buildings::{
    ActiveModel as BuildingActiveModel, Column as BuildingColumn, Entity as Buildings,
};
use crate::entity::campuses::{ActiveModel, Column, Entity as Campuses};
use crate::entity::rooms::{ActiveModel as RoomActiveModel, Column as RoomColumn, Entity as Rooms};
use crate::errors::Result;
use crate::models::campuses::{
    entities::{Building, Campus, Room},
    requests::{
        CampusListQuery, CreateBuildingRequest, CreateCampusRequest, CreateRoomRequest,
        UpdateCampusRequest,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_campus_impl(&self, req: CreateCampusRequest) -> Result<Campus> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            code: Set(req.code.trim().to_string()),
            address: Set(req.address),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create campus"))?;

        Ok(result.into_campus())
    }

    pub async fn get_campus_by_id_impl(&self, id: i64) -> Result<Option<Campus>> {
        let result = Campuses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query campus"))?;

        Ok(result.map(|m| m.into_campus()))
    }

    /// 列出校区，状态缺省为 active
    pub async fn list_campuses_impl(&self, query: CampusListQuery) -> Result<Vec<Campus>> {
        let status = query.status.unwrap_or_default();
        let mut select = Campuses::find().filter(Column::Status.eq(status.to_string()));

        if let Some(cond) = contains_ignore_case(&["name"], query.search.as_deref()) {
            select = select.filter(cond);
        }

        let campuses = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list campuses"))?;

        Ok(campuses.into_iter().map(|m| m.into_campus()).collect())
    }

    pub async fn update_campus_impl(&self, update: UpdateCampusRequest) -> Result<Option<Campus>> {
        // 先检查校区是否存在
        if self.get_campus_by_id_impl(update.id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(update.id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(code) = update.code {
            model.code = Set(code.trim().to_string());
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("update campus"))?;

        Ok(Some(result.into_campus()))
    }

    pub async fn delete_campus_impl(&self, id: i64) -> Result<()> {
        let result = Campuses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete campus"))?;

        ensure_deleted(result, "Campus", id)
    }

    pub async fn create_building_impl(&self, req: CreateBuildingRequest) -> Result<Building> {
        let model = BuildingActiveModel {
            campus_id: Set(req.campus_id),
            name: Set(req.name.trim().to_string()),
            code: Set(req.code),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create building"))?;

        Ok(result.into_building())
    }

    pub async fn get_building_by_id_impl(&self, id: i64) -> Result<Option<Building>> {
        let result = Buildings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query building"))?;

        Ok(result.map(|m| m.into_building()))
    }

    pub async fn list_buildings_by_campus_impl(&self, campus_id: i64) -> Result<Vec<Building>> {
        let buildings = Buildings::find()
            .filter(BuildingColumn::CampusId.eq(campus_id))
            .order_by_asc(BuildingColumn::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list buildings"))?;

        Ok(buildings.into_iter().map(|m| m.into_building()).collect())
    }

    pub async fn delete_building_impl(&self, id: i64) -> Result<()> {
        let result = Buildings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete building"))?;

        ensure_deleted(result, "Building", id)
    }

    pub async fn create_room_impl(&self, req: CreateRoomRequest) -> Result<Room> {
        let model = RoomActiveModel {
            building_id: Set(req.building_id),
            name: Set(req.name.trim().to_string()),
            capacity: Set(req.capacity),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create room"))?;

        Ok(result.into_room())
    }

    pub async fn get_room_by_id_impl(&self, id: i64) -> Result<Option<Room>> {
        let result = Rooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query room"))?;

        Ok(result.map(|m| m.into_room()))
    }

    pub async fn list_rooms_by_building_impl(&self, building_id: i64) -> Result<Vec<Room>> {
        let rooms = Rooms::find()
            .filter(RoomColumn::BuildingId.eq(building_id))
            .order_by_asc(RoomColumn::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list rooms"))?;

        Ok(rooms.into_iter().map(|m| m.into_room()).collect())
    }

    pub async fn delete_room_impl(&self, id: i64) -> Result<()> {
        let result = Rooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete room"))?;

        ensure_deleted(result, "Room", id)
    }
}
