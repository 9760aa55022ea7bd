pub mod subscription_store;
pub mod reader_service;

pub use subscription_store::SubscriptionStore;
pub use reader_service::ReaderService;
