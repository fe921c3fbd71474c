pub mod components;
pub mod config;
pub mod genai;
pub mod icons;
pub mod modal;
