//! Editor use-case services.
//!
//! # Responsibility
//! - Orchestrate grid transforms, history and persistence into user actions.
//! - Keep front ends decoupled from storage and history details.

pub mod editor_service;
