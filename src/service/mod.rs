//! Read services over the generic repository. Each applies its default filter (active rows)
//! and default ordering on top of caller-supplied [`FindArgs`].

mod catalog;
mod components;
mod placement;
mod pricing;
mod video_processor;

pub use catalog::CatalogService;
pub use components::ComponentService;
pub use placement::PlacementService;
pub use pricing::{CabinetPriceService, ItemPriceService, ModulePriceService};
pub use video_processor::VideoProcessorService;

use crate::query::FindArgs;
use crate::store::Store;
use std::sync::Arc;

/// Default filter shared by every catalog read.
pub(crate) fn active_only() -> FindArgs {
    FindArgs::new().eq("active", true)
}

/// All services over one store; cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub item_prices: ItemPriceService,
    pub module_prices: ModulePriceService,
    pub cabinet_prices: CabinetPriceService,
    pub components: ComponentService,
    pub placements: PlacementService,
    pub video_processors: VideoProcessorService,
    pub catalog: CatalogService,
}

impl Services {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Services {
            item_prices: ItemPriceService::new(Arc::clone(&store)),
            module_prices: ModulePriceService::new(Arc::clone(&store)),
            cabinet_prices: CabinetPriceService::new(Arc::clone(&store)),
            components: ComponentService::new(Arc::clone(&store)),
            placements: PlacementService::new(Arc::clone(&store)),
            video_processors: VideoProcessorService::new(Arc::clone(&store)),
            catalog: CatalogService::new(store),
        }
    }
}
