// src/domain/friend_member.rs
//
// Friends of Lancaster membership
//
// Keyed by the client it belongs to: one membership row per client.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendMember {
    /// Owning client, also the identity key
    pub client_id: u32,

    /// Whether the membership is currently active
    pub is_member: bool,

    /// Member discount, in percent
    pub discount: f64,
}

impl FriendMember {
    pub fn new(client_id: u32, is_member: bool, discount: f64) -> Self {
        Self {
            client_id,
            is_member,
            discount,
        }
    }
}

/// Discount cannot be negative (NaN is rejected)
pub fn validate_friend_member(member: &FriendMember) -> DomainResult<()> {
    if !(member.discount >= 0.0) {
        return Err(DomainError::validation(
            "discount",
            "Discount cannot be negative.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_discount_is_valid() {
        assert!(validate_friend_member(&FriendMember::new(2, false, 0.0)).is_ok());
    }

    #[test]
    fn test_negative_discount_fails() {
        assert!(validate_friend_member(&FriendMember::new(1, true, -1.0)).is_err());
        assert!(validate_friend_member(&FriendMember::new(1, true, f64::NAN)).is_err());
    }
}
