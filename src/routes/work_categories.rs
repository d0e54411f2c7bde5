use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Action};
use crate::models::work_categories::requests::{
    CreateWorkCategoryRequest, UpdateWorkCategoryRequest,
};
use crate::services::WorkCategoryService;

// 懒加载的全局 WORK_CATEGORY_SERVICE 实例
static WORK_CATEGORY_SERVICE: Lazy<WorkCategoryService> = Lazy::new(WorkCategoryService::new_lazy);

// HTTP处理程序
pub async fn list_work_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    WORK_CATEGORY_SERVICE.list_work_categories(&req).await
}

pub async fn get_work_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    WORK_CATEGORY_SERVICE
        .get_work_category(&req, category_id.into_inner())
        .await
}

pub async fn create_work_category(
    req: HttpRequest,
    category_data: web::Json<CreateWorkCategoryRequest>,
) -> ActixResult<HttpResponse> {
    WORK_CATEGORY_SERVICE
        .create_work_category(&req, category_data.into_inner())
        .await
}

pub async fn update_work_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
    update_data: web::Json<UpdateWorkCategoryRequest>,
) -> ActixResult<HttpResponse> {
    WORK_CATEGORY_SERVICE
        .update_work_category(&req, category_id.into_inner(), update_data.into_inner())
        .await
}

// 配置路由
pub fn configure_work_categories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/work-categories")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 所有登录用户可浏览目录
                    .route(
                        web::get()
                            .to(list_work_categories)
                            .wrap(middlewares::RequireRole::for_action(Action::ViewCatalog)),
                    )
                    .route(
                        web::post()
                            .to(create_work_category)
                            // 仅超级管理员维护目录
                            .wrap(middlewares::RequireRole::for_action(Action::ManageCatalog)),
                    ),
            )
            .service(
                web::resource("/{category_id}")
                    .route(
                        web::get()
                            .to(get_work_category)
                            .wrap(middlewares::RequireRole::for_action(Action::ViewCatalog)),
                    )
                    .route(
                        web::put()
                            .to(update_work_category)
                            .wrap(middlewares::RequireRole::for_action(Action::ManageCatalog)),
                    ),
            ),
    );
}
