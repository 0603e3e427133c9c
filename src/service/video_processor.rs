//! Video processor catalog.

use super::active_only;
use crate::error::AppError;
use crate::model::VideoProcessor;
use crate::query::FindArgs;
use crate::repo::Repository;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct VideoProcessorService {
    repo: Repository<VideoProcessor>,
}

impl VideoProcessorService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        VideoProcessorService {
            repo: Repository::new(store),
        }
    }

    /// Active processors, cheapest first. Caller filters and paging are kept; the active filter
    /// and price ordering always win.
    pub async fn find_all(&self, args: FindArgs) -> Result<Vec<VideoProcessor>, AppError> {
        let defaults = active_only().order_asc("price").order_asc("id");
        self.repo.find_many(args.with_defaults(defaults)).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<VideoProcessor>, AppError> {
        self.repo.find_unique("code", code, active_only()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn svc() -> VideoProcessorService {
        let store = MemoryStore::new().with_rows(
            "video_processors",
            vec![
                json!({"id": 1, "code": "VX1000", "name": "NovaStar VX1000", "price": 185000.0, "currency": "RUB", "max_pixels": 6500000, "active": true}),
                json!({"id": 2, "code": "VX400", "name": "NovaStar VX400", "price": 98000.0, "currency": "RUB", "max_pixels": 2600000, "active": true}),
                json!({"id": 3, "code": "LVP605", "name": "LVP605", "price": 45000.0, "currency": "RUB", "active": false}),
                json!({"id": 4, "code": "VX600", "name": "NovaStar VX600", "price": 98000.0, "currency": "RUB", "active": true}),
            ],
        );
        VideoProcessorService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn lists_active_rows_in_non_decreasing_price() {
        let rows = svc()
            .find_all(FindArgs::new().eq("active", false).order_desc("price"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.active));
        assert!(rows.windows(2).all(|w| w[0].price <= w[1].price));
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[tokio::test]
    async fn caller_paging_is_kept() {
        let rows = svc().find_all(FindArgs::new().take(1).skip(1)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "VX600");
    }

    #[tokio::test]
    async fn find_by_code_hides_inactive() {
        let s = svc();
        assert!(s.find_by_code("LVP605").await.unwrap().is_none());
        assert_eq!(s.find_by_code("VX400").await.unwrap().map(|v| v.id), Some(2));
    }
}
