//! Host wallet services

pub mod provider;
