//! Relational link assembly for event responses.
//!
//! The creation response carries a HAL-style `_links` object alongside the
//! entity fields. The link set is fixed, so a plain struct keeps the key
//! order deterministic without an ordered-map dependency.

use gather_core::types::DbId;
use gather_db::models::Event;
use serde::Serialize;

/// A single hypermedia link.
#[derive(Debug, Serialize)]
pub struct Link {
    pub href: String,
}

/// Links attached to a freshly created event.
#[derive(Debug, Serialize)]
pub struct EventLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(rename = "query-events")]
    pub query_events: Link,
    #[serde(rename = "update-event")]
    pub update_event: Link,
    pub profile: Link,
}

impl EventLinks {
    pub fn for_created(id: DbId) -> Self {
        EventLinks {
            self_link: Link {
                href: event_uri(id),
            },
            query_events: Link {
                href: "/api/v1/events".into(),
            },
            update_event: Link {
                href: event_uri(id),
            },
            profile: Link {
                href: "/docs/index.html#resources-events-create".into(),
            },
        }
    }
}

/// Canonical URI for one event, also used as the `Location` header value.
pub fn event_uri(id: DbId) -> String {
    format!("/api/v1/events/{id}")
}

/// An event plus its `_links` object, flattened into one JSON body.
#[derive(Debug, Serialize)]
pub struct EventResource {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "_links")]
    pub links: EventLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_links_point_at_the_new_event() {
        let links = EventLinks::for_created(7);
        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["self"]["href"], "/api/v1/events/7");
        assert_eq!(json["update-event"]["href"], "/api/v1/events/7");
        assert_eq!(json["query-events"]["href"], "/api/v1/events");
        assert_eq!(json["profile"]["href"], "/docs/index.html#resources-events-create");
    }
}
