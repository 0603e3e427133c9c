//! Price lookups keyed by item, module, and cabinet code.

use super::active_only;
use crate::error::AppError;
use crate::model::{CabinetPrice, ItemPrice, ModulePrice};
use crate::query::FindArgs;
use crate::repo::Repository;
use crate::store::Store;
use std::sync::Arc;

macro_rules! price_service {
    ($(#[$doc:meta])* $name:ident, $record:ty, $column:literal, $find_one:ident, $find_many:ident) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            repo: Repository<$record>,
        }

        impl $name {
            pub fn new(store: Arc<dyn Store>) -> Self {
                $name {
                    repo: Repository::new(store),
                }
            }

            /// Active price for one code, or `None`.
            pub async fn $find_one(&self, code: &str, args: FindArgs) -> Result<Option<$record>, AppError> {
                self.repo
                    .find_unique($column, code, args.with_defaults(active_only()))
                    .await
            }

            /// Active prices for a set of codes, ordered by code. Unknown codes are skipped.
            pub async fn $find_many(&self, codes: &[String], args: FindArgs) -> Result<Vec<$record>, AppError> {
                if codes.is_empty() {
                    return Ok(Vec::new());
                }
                let defaults = active_only()
                    .is_in($column, codes.iter().cloned())
                    .order_asc($column);
                self.repo.find_many(args.with_defaults(defaults)).await
            }
        }
    };
}

price_service!(
    /// Prices of individual components (power supplies, receiving cards, cables).
    ItemPriceService, ItemPrice, "item_code", find_by_item_code, find_many_by_item_codes
);
price_service!(ModulePriceService, ModulePrice, "module_code", find_by_module_code, find_many_by_module_codes);
price_service!(CabinetPriceService, CabinetPrice, "cabinet_code", find_by_cabinet_code, find_many_by_cabinet_codes);
