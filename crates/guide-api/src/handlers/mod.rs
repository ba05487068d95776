//! API request handlers organized by domain

pub mod admin;
pub mod auth;
pub mod availability;
pub mod bookings;
pub mod complaints;
pub mod health;
pub mod languages;
pub mod profile;
pub mod search;
