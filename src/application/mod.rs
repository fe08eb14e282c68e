/// Application layer - Use cases, caches and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod caches;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
