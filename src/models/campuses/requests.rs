use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::models::common::RecordStatus;
use crate::utils::validate::require_non_empty;

// 创建校区请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct CreateCampusRequest {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateCampusRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("code", &self.code)
    }
}

// 更新校区请求（部分字段）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct UpdateCampusRequest {
    pub id: i64,
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub status: Option<RecordStatus>,
}

impl UpdateCampusRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(code) = &self.code {
            require_non_empty("code", code)?;
        }
        Ok(())
    }
}

// 校区列表查询
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct CampusListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
}

// 创建教学楼请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct CreateBuildingRequest {
    pub campus_id: i64,
    pub name: String,
    pub code: Option<String>,
}

impl CreateBuildingRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct ListBuildingsRequest {
    pub campus_id: i64,
}

// 创建教室请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct CreateRoomRequest {
    pub building_id: i64,
    pub name: String,
    pub capacity: Option<i32>,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        if matches!(self.capacity, Some(c) if c < 1) {
            return Err(DashboardError::validation("Room capacity must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct ListRoomsRequest {
    pub building_id: i64,
}
