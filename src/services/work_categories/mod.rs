pub mod create;
pub mod edit;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::work_categories::requests::{
    CreateWorkCategoryRequest, UpdateWorkCategoryRequest,
};
use crate::storage::Storage;

pub struct WorkCategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl WorkCategoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出工作类别目录
    pub async fn list_work_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_work_categories(self, request).await
    }

    // 获取单个工作类别
    pub async fn get_work_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_work_category(self, request, category_id).await
    }

    // 创建工作类别（含嵌套要求）
    pub async fn create_work_category(
        &self,
        request: &HttpRequest,
        category_data: CreateWorkCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_work_category(self, request, category_data).await
    }

    // 编辑工作类别（要求集合整体重写）
    pub async fn update_work_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
        update_data: UpdateWorkCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        edit::update_work_category(self, request, category_id, update_data).await
    }
}
