//! Placement resolution: cabinet code -> cabinet_placements -> placements.

use super::active_only;
use crate::error::AppError;
use crate::model::{CabinetPlacement, Placement};
use crate::query::FindArgs;
use crate::repo::Repository;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlacementService {
    links: Repository<CabinetPlacement>,
    placements: Repository<Placement>,
}

impl PlacementService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        PlacementService {
            links: Repository::new(Arc::clone(&store)),
            placements: Repository::new(store),
        }
    }

    /// Active placements linked to a cabinet. Skips the second query when there are no links.
    pub async fn find_by_cabinet_code(&self, code: &str) -> Result<Vec<Placement>, AppError> {
        let links = self
            .links
            .find_many(FindArgs::new().eq("cabinet_code", code))
            .await?;
        if links.is_empty() {
            return Ok(Vec::new());
        }
        let mut codes: Vec<String> = links.into_iter().map(|l| l.placement_code).collect();
        codes.sort();
        codes.dedup();
        let args = active_only().is_in("code", codes).order_asc("id");
        self.placements.find_many(args).await
    }
}
