pub mod create;
pub mod delete;
pub mod detail;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tests::requests::{CreateTestRequest, TestListQuery};
use crate::storage::Storage;

pub struct TestService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestService {
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

    /// 创建测试
    pub async fn create_test(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateTestRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_test(self, request, created_by, req).await
    }

    /// 获取测试详情
    pub async fn get_test(&self, request: &HttpRequest, test_id: i64) -> ActixResult<HttpResponse> {
        detail::get_test(self, request, test_id).await
    }

    /// 列出测试
    pub async fn list_tests(
        &self,
        request: &HttpRequest,
        query: TestListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_tests(self, request, query).await
    }

    /// 删除测试
    pub async fn delete_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_test(self, request, test_id).await
    }
}
