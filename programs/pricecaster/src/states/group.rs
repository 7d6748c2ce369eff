use super::{Address, Configuration};

/// Summary of one transaction of the atomic group a store call is part of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTxn {
    /// Application call (or opt-in) to the given application id
    AppCall { app_id: u64 },
    /// Payment, used to fund fees upfront
    Payment { sender: Address },
    /// Anything else
    Other,
}

/// Transactions executed atomically with a store call.
///
/// `txns` holds the other members of the group, the store call itself excluded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupContext {
    pub txns: Vec<GroupTxn>,
}

impl GroupContext {
    /// Store call submitted on its own
    pub fn standalone() -> Self {
        Self::default()
    }

    pub fn new(txns: Vec<GroupTxn>) -> Self {
        Self { txns }
    }

    pub fn group_size(&self) -> usize {
        self.txns.len() + 1
    }

    /// Check that the attestation was verified in the same group:
    ///
    /// - The group holds at least one call to the verifier application.
    /// - Every other transaction is a verifier call, a call to this application,
    ///   or a payment sent by the operator.
    pub fn is_verified_by(&self, configuration: &Configuration) -> bool {
        if self.group_size() < 2 {
            return false;
        }

        let mut has_verifier_call = false;
        for txn in self.txns.iter() {
            match txn {
                GroupTxn::AppCall { app_id } if *app_id == configuration.verifier_app_id => {
                    has_verifier_call = true;
                }
                GroupTxn::AppCall { app_id } if *app_id == configuration.app_id => {}
                GroupTxn::Payment { sender } if *sender == configuration.operator => {}
                _ => return false,
            }
        }

        has_verifier_call
    }
}
