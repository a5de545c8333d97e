pub mod db;
pub mod event_status;
pub mod models;
pub mod pagination;
pub mod repos;
