pub mod config;
pub mod data_storage;
pub mod editor;
pub mod form;
pub mod messages;
pub mod notify;
pub mod store;
pub mod task;
pub mod view;
