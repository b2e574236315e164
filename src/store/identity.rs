//! Identity allocation

use uuid::Uuid;

/// Issues random UUID v4 ids for new records.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAllocator;

impl IdentityAllocator {
    pub fn new() -> Self {
        Self
    }

    pub fn allocate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
