//! # Portal Core
//!
//! Core types shared by the portal data layer: typed identifiers, the
//! access control and account entities, the tagged error type with its
//! localized boundary form, and tracing initialization.

pub mod domain;
pub mod error;
pub mod i18n;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use i18n::{Locale, MessageSource, StaticMessageSource, StaticMessageSourceParameters};
pub use id::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
