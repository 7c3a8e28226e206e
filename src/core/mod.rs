//! Core translation module

pub mod config;
pub mod engine;
pub mod errors;
pub mod languages;
pub mod models;
pub mod translator;
