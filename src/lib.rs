pub mod api;
pub mod config;
pub mod service;
pub mod storage;
