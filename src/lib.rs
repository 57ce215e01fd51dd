//! Servicio "Crop Doctor": chat agrícola y diagnóstico de enfermedades de
//! cultivos a partir de una foto, sobre un LLM con visión.

pub mod api;
pub mod app_state;
pub mod chat;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod image;
pub mod languages;
pub mod llm;
pub mod localization;
pub mod models;
pub mod products;

mod crop_data;
mod disease_data;

pub use disease_data::DiseaseRecord;
