//! Server-rendered portfolio site.
//!
//! A fixed catalog of content sections is looped for infinite scrolling,
//! enriched server-side with deterministic colors and shapes, and rendered
//! into a single HTML page. Responses carry an explicit caching,
//! compression, and security-header policy.
//!
//! Module layout:
//! - `config`: environment-driven server configuration and render mode
//! - `sections`: the section catalog and client animation constants
//! - `enrich`: the deterministic looping/color/shape pipeline
//! - `server`: axum state, router, handlers, and response policy

pub mod config;
pub mod enrich;
pub mod sections;
pub mod server;

// Re-export commonly used types
pub use config::{ConfigError, RenderMode, ServerConfig};
pub use enrich::{enrich_sections, EnrichedSection};
pub use sections::{AnimationConfig, ScrollConfig, Section, SectionRepository};
pub use server::{create_router, AppState};
