//! Advisory cancellation for outbound link requests.
//!
//! Resolution itself is synchronous and never cancelled; a
//! [`CancellationToken`] only aborts the transport call made for a resolved
//! link.

mod token;

pub use token::CancellationToken;
