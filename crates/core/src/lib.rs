//! # uxlab
//!
//! Mechanism library for the UXLab education site: the content registry,
//! route resolution, and the small pieces of presentation state (scenario
//! shell, drag scroller) that the web frontend drives.
//!
//! Everything here is plain host-testable Rust — no browser types, no UI
//! framework. The web crate layers Leptos components on top of these models.
//!
//! ## Quick Start
//!
//! ```
//! use uxlab::registry::{Registry, Resolution};
//!
//! let registry = Registry::from_json(
//!     r#"[{
//!         "id": "visibility-of-system-status",
//!         "title": "1. Visibility of System Status",
//!         "description": "Keep users informed.",
//!         "whyItMatters": "Feedback builds trust.",
//!         "digitalExample": {
//!             "title": "Progress bar",
//!             "description": "Shows upload progress.",
//!             "whyItMatters": "Users know the system is working."
//!         },
//!         "realWorldExample": []
//!     }]"#,
//! )
//! .unwrap();
//!
//! match registry.resolve(Some("visibility-of-system-status")) {
//!     Resolution::Entry(entry) => assert_eq!(entry.id, "visibility-of-system-status"),
//!     Resolution::Redirect(_) => unreachable!(),
//! }
//! ```

pub mod content;
pub mod registry;
pub mod route;
pub mod scenario;
pub mod scroller;

pub use content::{ContentEntry, DigitalExample, RealWorldCard};
pub use registry::{Registry, RegistryError, Resolution};
pub use route::Collection;
