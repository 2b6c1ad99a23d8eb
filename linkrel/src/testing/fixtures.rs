//! Test fixtures for link resolution.

use crate::model::{Link, LinkedRepresentation};

/// A builder for representations used in tests.
#[derive(Debug, Default)]
pub struct RepresentationBuilder {
    representation: LinkedRepresentation,
}

impl RepresentationBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link with a relation and target.
    #[must_use]
    pub fn link(mut self, rel: &str, href: &str) -> Self {
        self.representation.links.push(Link::new(rel, href));
        self
    }

    /// Adds a typed link.
    #[must_use]
    pub fn typed_link(mut self, rel: &str, href: &str, media_type: &str) -> Self {
        self.representation
            .links
            .push(Link::new(rel, href).with_media_type(media_type));
        self
    }

    /// Adds a titled link.
    #[must_use]
    pub fn titled_link(mut self, rel: &str, href: &str, title: &str) -> Self {
        self.representation
            .links
            .push(Link::new(rel, href).with_title(title));
        self
    }

    /// Adds a domain field.
    #[must_use]
    pub fn field(mut self, key: &str, value: serde_json::Value) -> Self {
        self.representation.fields.insert(key.to_string(), value);
        self
    }

    /// Builds the representation.
    #[must_use]
    pub fn build(self) -> LinkedRepresentation {
        self.representation
    }
}

/// An order resource with `self`, `edit`, `payment` and `item` links.
#[must_use]
pub fn sample_order() -> LinkedRepresentation {
    RepresentationBuilder::new()
        .field("id", serde_json::json!(1))
        .titled_link("self", "/orders/1", "Order 1")
        .typed_link("edit", "/orders/1/edit", "application/vnd.order+json")
        .link("payment", "/orders/1/payment")
        .typed_link("item", "/orders/1/items/1", "application/json")
        .typed_link("item", "/orders/1/items/2", "text/html")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_no_match, assert_resolves_to};

    #[test]
    fn test_sample_order() {
        let order = sample_order();
        assert_eq!(order.links.len(), 5);
        assert_eq!(order.field("id"), Some(&serde_json::json!(1)));
        assert_resolves_to(&order, "item", None, &["/orders/1/items/1", "/orders/1/items/2"]);
        assert_resolves_to(&order, "item", Some("text/html"), &["/orders/1/items/2"]);
        assert_no_match(&order, "cancel", None);
    }
}
