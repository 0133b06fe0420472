use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode, web};
use serde::Serialize;

use crate::middlewares::{RequestContext, RequireJWT};
use crate::models::pages::PageState;

// 页面状态映射到 HTTP 状态码，页面体始终为带 state 标签的 JSON
pub(crate) fn page_response<T: Serialize>(page: PageState<T>) -> HttpResponse {
    let status = match &page {
        PageState::Success { .. } => StatusCode::OK,
        PageState::NotFound { .. } => StatusCode::NOT_FOUND,
        PageState::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(page)
}

pub async fn teacher_edit(
    ctx: RequestContext,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (role, teacher_id) = path.into_inner();
    let page = ctx.pages().teacher_edit(&ctx.caller, &role, teacher_id).await;
    Ok(page_response(page))
}

pub async fn class_detail(
    ctx: RequestContext,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (role, class_id) = path.into_inner();
    let page = ctx.pages().class_detail(&ctx.caller, &role, class_id).await;
    Ok(page_response(page))
}

pub async fn class_edit(
    ctx: RequestContext,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (role, class_id) = path.into_inner();
    let page = ctx.pages().class_edit(&ctx.caller, &role, class_id).await;
    Ok(page_response(page))
}

pub async fn gradebook(
    ctx: RequestContext,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (role, class_id) = path.into_inner();
    let page = ctx.pages().gradebook(&ctx.caller, &role, class_id).await;
    Ok(page_response(page))
}

// 配置页面路由
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard/{role}")
            .wrap(RequireJWT)
            .route("/teacher/{id}/edit", web::get().to(teacher_edit))
            .route("/class/{id}", web::get().to(class_detail))
            .route("/class/{id}/edit", web::get().to(class_edit))
            .route("/gradebook/{class_id}", web::get().to(gradebook)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_status() {
        let ok = page_response(PageState::Success { data: 1 });
        assert_eq!(ok.status(), StatusCode::OK);

        let missing: PageState<i32> = PageState::not_found("Teacher 9 not found");
        assert_eq!(page_response(missing).status(), StatusCode::NOT_FOUND);

        let failed: PageState<i32> = PageState::Error {
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            page_response(failed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
