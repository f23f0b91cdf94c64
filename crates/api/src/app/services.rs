use std::sync::Arc;

use stockroom_infra::store::{FileItemStore, FileSalesLog};
use stockroom_infra::{ItemStore, SalesLog, ShopConfig, ShopService};

/// The service handlers work against, with storage chosen at startup.
pub type AppServices = ShopService<Arc<dyn ItemStore>, Arc<dyn SalesLog>>;

/// File-backed services at the configured paths.
pub fn build_services(config: &ShopConfig) -> AppServices {
    let items: Arc<dyn ItemStore> = Arc::new(FileItemStore::new(config.items_path()));
    let sales: Arc<dyn SalesLog> = Arc::new(FileSalesLog::new(config.sales_path()));
    ShopService::new(items, sales)
}
