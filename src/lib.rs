//! # Airship
//!
//! Client for the Urban Airship push notification API (v3).
//!
//! Build a [`PushPayload`] — an audience selector plus per-platform message
//! variants — and deliver it to a single targeted audience or as a
//! broadcast to all registered devices. Unset payload fields are omitted
//! from the wire entirely, so requests stay as compact as what the caller
//! actually set.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airship::{AirshipClient, AirshipConfig, Audience, IosOverride, Notification, PushPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AirshipClient::new(AirshipConfig::new("app-key", "master-secret"));
//!
//!     let payload = PushPayload::new(
//!         Notification::new("Yo man !").ios(IosOverride::default().badge("+1")),
//!     )
//!     .audience(Audience::ios("device-token"))
//!     .device_types("all");
//!
//!     client.push(&payload).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Broadcast
//!
//! ```rust,ignore
//! let payload = PushPayload::new(Notification::new("Maintenance tonight"));
//! client.broadcast(&payload).await?;
//! ```
//!
//! Errors are never retried or swallowed here; resilience policy belongs to
//! the caller, and timeouts belong to the `reqwest::Client` passed to
//! [`AirshipClient::with_http_client`].

mod client;
mod error;
mod payload;

pub use client::{AirshipClient, AirshipConfig, DEFAULT_BASE_URL};
pub use error::{AirshipError, Result};
pub use payload::{AlertOverride, Audience, DeviceIds, IosOverride, Notification, PushPayload};

/// Prelude for common imports.
///
/// ```
/// use airship::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{AirshipClient, AirshipConfig, DEFAULT_BASE_URL};
    pub use crate::error::{AirshipError, Result};
    pub use crate::payload::{
        AlertOverride, Audience, DeviceIds, IosOverride, Notification, PushPayload,
    };
}
