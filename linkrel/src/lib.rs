//! # linkrel
//!
//! Hypermedia link-relation resolution.
//!
//! A resource representation carries typed links (`rel`, `href`, `type`,
//! `title`). linkrel finds the link a client needs by relation, media type
//! and title, with deterministic precedence:
//!
//! - **Selector normalization**: strings, regexes, structured selectors and
//!   lists of them reduce to one ordered list of selectors
//! - **Weighted matching**: links matched by earlier selectors come first;
//!   ties keep document order
//! - **Wildcards**: an absent, empty, `*` or `*/*` media type matches any link
//! - **Link sources**: slices, JSON, [`LinkedRepresentation`]s and HTML pages
//! - **Transport**: follow the best link with GET/PUT/POST/PATCH/DELETE
//!
//! ## Quick Start
//!
//! ```rust
//! use linkrel::prelude::*;
//!
//! let order = LinkedRepresentation::from_links(vec![
//!     Link::new("self", "/orders/1").with_title("Order 1"),
//!     Link::new("edit", "/orders/1/edit").with_media_type("application/json"),
//! ]);
//!
//! assert_eq!(get_uri(&order, "edit", Some("application/json"), None).as_deref(), Some("/orders/1/edit"));
//! assert_eq!(get_title(&order, "self", None), "Order 1");
//! assert!(!matches(&order, "payment", None));
//!
//! // Earlier selectors win regardless of document order.
//! let links = resolve(&order, vec!["edit", "self"], None);
//! assert_eq!(links[0].rel, "edit");
//! ```
//!
//! [`LinkedRepresentation`]: model::LinkedRepresentation

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cancellation;
pub mod config;
pub mod errors;
pub mod matching;
pub mod model;
pub mod observability;
pub mod selector;
pub mod testing;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "http")]
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cancellation::CancellationToken;
    pub use crate::config::{MissLevel, ResolverConfig};
    pub use crate::errors::{LinkrelError, NoMatchError, Result, UnsupportedSelectorError};
    pub use crate::matching::{
        get_title, get_uri, matches, resolve, DiagnosticSink, LinkResolver, MissReport,
        TracingDiagnosticSink,
    };
    pub use crate::model::{Link, LinkSource, LinkedRepresentation};
    pub use crate::selector::{Pattern, RelationInput, RelationItem, Selector};

    #[cfg(feature = "html")]
    pub use crate::html::HtmlLinks;

    #[cfg(feature = "http")]
    pub use crate::transport::{
        HttpMethod, LinkClient, LinkRequest, LinkResponse, RequestOptions, ReqwestTransport,
        Transport, TransportConfig,
    };
}
