/// Which transfer parties the whitelist check applies to.
///
/// The deployed policy is the `TRANSFER_POLICY` constant; the hook never
/// reads it from an account, so changing policy means redeploying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferPolicy {
    /// Only the sending owner must be whitelisted
    SenderOnly,
    /// Only the receiving owner must be whitelisted
    RecipientOnly,
    /// Both the sending and the receiving owner must be whitelisted
    SenderAndRecipient,
}

impl TransferPolicy {
    /// Decide whether a transfer may settle, given each party's membership.
    /// The parties are beneficial owners of the token accounts, not the
    /// token accounts themselves.
    pub const fn allows(&self, sender_whitelisted: bool, recipient_whitelisted: bool) -> bool {
        match self {
            TransferPolicy::SenderOnly => sender_whitelisted,
            TransferPolicy::RecipientOnly => recipient_whitelisted,
            TransferPolicy::SenderAndRecipient => sender_whitelisted && recipient_whitelisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRANSFER_POLICY;

    #[test]
    fn test_sender_only_ignores_recipient() {
        let policy = TransferPolicy::SenderOnly;

        assert!(policy.allows(true, true));
        assert!(policy.allows(true, false));
        assert!(!policy.allows(false, true));
        assert!(!policy.allows(false, false));
    }

    #[test]
    fn test_recipient_only_ignores_sender() {
        let policy = TransferPolicy::RecipientOnly;

        assert!(policy.allows(true, true));
        assert!(!policy.allows(true, false));
        assert!(policy.allows(false, true));
        assert!(!policy.allows(false, false));
    }

    #[test]
    fn test_sender_and_recipient_requires_both() {
        let policy = TransferPolicy::SenderAndRecipient;

        assert!(policy.allows(true, true));
        assert!(!policy.allows(true, false));
        assert!(!policy.allows(false, true));
        assert!(!policy.allows(false, false));
    }

    #[test]
    fn test_deployed_policy_requires_both_parties() {
        // A transfer between two whitelisted owners goes through; any
        // transfer touching an unlisted owner on either side is blocked
        assert!(TRANSFER_POLICY.allows(true, true));
        assert!(!TRANSFER_POLICY.allows(true, false));
        assert!(!TRANSFER_POLICY.allows(false, true));
        assert!(!TRANSFER_POLICY.allows(false, false));
    }
}
