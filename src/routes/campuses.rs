use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::campuses::requests::{
    CampusListQuery, CreateBuildingRequest, CreateCampusRequest, CreateRoomRequest,
    ListBuildingsRequest, ListRoomsRequest, UpdateCampusRequest,
};
use crate::models::common::IdRequest;

pub async fn create_campus(
    ctx: RequestContext,
    body: web::Json<CreateCampusRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "campus.create",
        ctx.campuses().create(body.into_inner()).await,
        "Campus created successfully",
    )
}

pub async fn list_campuses(
    ctx: RequestContext,
    body: web::Json<CampusListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "campus.list",
        ctx.campuses().list(body.into_inner()).await,
        "Campuses retrieved successfully",
    )
}

pub async fn get_campus(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "campus.get",
        ctx.campuses().get(body.id).await,
        "Campus retrieved successfully",
    )
}

pub async fn update_campus(
    ctx: RequestContext,
    body: web::Json<UpdateCampusRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "campus.update",
        ctx.campuses().update(body.into_inner()).await,
        "Campus updated successfully",
    )
}

pub async fn delete_campus(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "campus.delete",
        ctx.campuses().delete(body.id).await,
        "Campus deleted successfully",
    )
}

pub async fn create_building(
    ctx: RequestContext,
    body: web::Json<CreateBuildingRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "building.create",
        ctx.campuses().create_building(body.into_inner()).await,
        "Building created successfully",
    )
}

pub async fn list_buildings(
    ctx: RequestContext,
    body: web::Json<ListBuildingsRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "building.listByCampus",
        ctx.campuses().list_buildings(body.campus_id).await,
        "Buildings retrieved successfully",
    )
}

pub async fn delete_building(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "building.delete",
        ctx.campuses().delete_building(body.id).await,
        "Building deleted successfully",
    )
}

pub async fn create_room(
    ctx: RequestContext,
    body: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "room.create",
        ctx.campuses().create_room(body.into_inner()).await,
        "Room created successfully",
    )
}

pub async fn list_rooms(
    ctx: RequestContext,
    body: web::Json<ListRoomsRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "room.listByBuilding",
        ctx.campuses().list_rooms(body.building_id).await,
        "Rooms retrieved successfully",
    )
}

pub async fn delete_room(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "room.delete",
        ctx.campuses().delete_room(body.id).await,
        "Room deleted successfully",
    )
}

pub fn configure_campus_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/campus.list").route(web::post().to(list_campuses)))
        .service(web::resource("/campus.get").route(web::post().to(get_campus)))
        .service(
            web::resource("/campus.create").route(web::post().to(create_campus).wrap(admin_only())),
        )
        .service(
            web::resource("/campus.update").route(web::post().to(update_campus).wrap(admin_only())),
        )
        .service(
            web::resource("/campus.delete").route(web::post().to(delete_campus).wrap(admin_only())),
        )
        // 教学楼
        .service(web::resource("/building.listByCampus").route(web::post().to(list_buildings)))
        .service(
            web::resource("/building.create")
                .route(web::post().to(create_building).wrap(admin_only())),
        )
        .service(
            web::resource("/building.delete")
                .route(web::post().to(delete_building).wrap(admin_only())),
        )
        // 教室
        .service(web::resource("/room.listByBuilding").route(web::post().to(list_rooms)))
        .service(
            web::resource("/room.create").route(web::post().to(create_room).wrap(admin_only())),
        )
        .service(
            web::resource("/room.delete").route(web::post().to(delete_room).wrap(admin_only())),
        );
}
