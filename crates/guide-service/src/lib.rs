//! # guide-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceError, ServiceResult};
