use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{PricecasterError, PricecasterResult};

/// 32 bytes account identifier of the host ledger
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[derive(IntoPrimitive, TryFromPrimitive, EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Role {
    /// Creator of the store: sets flags, resets the store
    Admin = 0,
    /// Publishes price updates
    Operator = 1,
    /// Allocates slots to assets
    Quant = 2,
}

impl Role {
    fn mask(self) -> u8 {
        1 << u8::from(self)
    }
}

/// Roles held by one caller, resolved once when a call enters the engine
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet(u8);

impl RoleSet {
    pub fn with(self, role: Role) -> Self {
        Self(self.0 | role.mask())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.mask() != 0
    }

    pub fn require(&self, role: Role) -> PricecasterResult<()> {
        if self.contains(role) {
            Ok(())
        } else {
            Err(PricecasterError::Unauthorized)
        }
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Role::iter().filter(|role| self.contains(*role)))
            .finish()
    }
}

/// Parameters fixed when the store is created
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    pub admin: Address,
    pub operator: Address,
    pub quant: Address,
    /// Application verifying the attestation signatures (Wormhole core)
    pub verifier_app_id: u64,
    /// Application id of this store on the host ledger
    pub app_id: u64,
}

impl Configuration {
    pub fn roles_of(&self, caller: &Address) -> RoleSet {
        let mut roles = RoleSet::default();
        if *caller == self.admin {
            roles = roles.with(Role::Admin);
        }
        if *caller == self.operator {
            roles = roles.with(Role::Operator);
        }
        if *caller == self.quant {
            roles = roles.with(Role::Quant);
        }
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> Configuration {
        Configuration {
            admin: Address::new([1; 32]),
            operator: Address::new([2; 32]),
            quant: Address::new([3; 32]),
            verifier_app_id: 10_000,
            app_id: 20_000,
        }
    }

    #[test]
    fn test_roles_of() {
        let config = configuration();

        let roles = config.roles_of(&Address::new([2; 32]));
        assert!(roles.contains(Role::Operator));
        assert!(!roles.contains(Role::Admin));
        assert!(!roles.contains(Role::Quant));
        assert_eq!(roles.require(Role::Operator), Ok(()));
        assert_eq!(
            roles.require(Role::Quant),
            Err(PricecasterError::Unauthorized)
        );

        let stranger = config.roles_of(&Address::new([9; 32]));
        assert_eq!(stranger, RoleSet::default());
    }

    #[test]
    fn test_one_address_many_roles() {
        let mut config = configuration();
        config.quant = config.admin;

        let roles = config.roles_of(&config.admin);
        assert!(roles.contains(Role::Admin));
        assert!(roles.contains(Role::Quant));
        assert_eq!(format!("{roles:?}"), "{Admin, Quant}");
    }

    #[test]
    fn test_address_display() {
        let mut bytes = [0_u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let text = Address::new(bytes).to_string();
        assert_eq!(text.len(), 64);
        assert!(text.starts_with("ab00"));
        assert!(text.ends_with("0001"));
    }
}
