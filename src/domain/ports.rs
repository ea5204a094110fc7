use crate::app::theme::Theme;
use crate::domain::model::LookupResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 查詢來源。實作負責把回應分成「查無資料」與「網路錯誤」兩類
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// `query` 已經過正規化且不為空
    async fn lookup(&self, query: &str) -> Result<LookupResult>;
}

/// 頁面快照的輸出位置
pub trait PageStore: Send + Sync {
    fn write_page(&self, html: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn snapshot_path(&self) -> Option<&str>;
    fn initial_theme(&self) -> Theme;
}
