//! Infrastructure layer: flat-file persistence, configuration and the
//! application service that ties the domain crates to storage.

pub mod config;
pub mod service;
pub mod store;

pub use config::{ConfigError, ShopConfig};
pub use service::{Dashboard, ServiceError, ShopService};
pub use store::{ItemStore, SalesLog, StoreError};
