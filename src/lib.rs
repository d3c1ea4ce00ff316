pub mod app_state;
pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod survey;

#[cfg(test)]
pub mod test_utils;
