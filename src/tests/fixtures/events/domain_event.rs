use serde::Serialize;

/// Minimal event used to exercise the generic infrastructure without habit semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEvent {
    pub name: &'static str,
}
