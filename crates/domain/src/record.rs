use alloy_primitives::Address;

use crate::dns_name::EncodedName;

/// A name → address mapping learned from chain 2. Keyed by `name`; the store
/// keeps only the latest address per name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRecord {
    pub name: EncodedName,
    pub address: Address,
    pub updated_at: Option<String>,
}

impl ResolutionRecord {
    pub fn new(name: EncodedName, address: Address) -> Self {
        Self {
            name,
            address,
            updated_at: None,
        }
    }

    pub fn dotted_name(&self) -> String {
        self.name.to_dotted()
    }
}

/// Body of a registration or sync request, after parsing.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub name: EncodedName,
    pub address: Address,
    pub label: Option<String>,
    pub signature: Option<alloy_primitives::Bytes>,
}

impl RegistrationRequest {
    /// The label being registered: the explicit one if given, otherwise the
    /// leftmost label of the name. An explicit label must match the name.
    pub fn effective_label(&self) -> Result<String, crate::DomainError> {
        let first = self.name.first_label().ok_or_else(|| {
            crate::DomainError::InvalidRequest("cannot register the root name".to_string())
        })?;
        match self.label.as_deref() {
            Some(label) if label != first => Err(crate::DomainError::InvalidRequest(format!(
                "label '{}' does not match name '{}'",
                label, self.name
            ))),
            _ => Ok(first.to_string()),
        }
    }
}
