// 💳 Demo Account - The three bindings shown by the walkthrough
//
// "Account id is IDENTITY (never changes), account email is a VALUE (can change)"
//
// The third binding, account state, is declared without a value: it stays
// `None` until something assigns it, and `None` is distinguishable from
// every real state.

use serde::{Deserialize, Serialize};

// ============================================================================
// DEMO VALUES
// ============================================================================

/// Stable account identifier. Declared `const`: reassignment is a compile
/// error, which is the strongest immutability guarantee available.
pub const ACCOUNT_ID: i64 = 144553;

/// Initial value of the email binding. The binding itself is reassignable;
/// the walkthrough declares it, prints it, and never writes to it again.
pub const ACCOUNT_EMAIL: &str = "shivamattri@gmail.com";

// ============================================================================
// ACCOUNT STATE
// ============================================================================

/// States an account can be assigned once it has one.
///
/// The walkthrough never assigns a state: the binding is
/// `Option<AccountState>` and stays `None`. Using a domain enum here keeps
/// "never assigned" distinct from any assigned value, rather than leaning on
/// a zero or empty-string sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AccountState {
    /// Account is open and usable
    Active,

    /// Account is temporarily locked
    Suspended,

    /// Account has been closed
    Closed,
}

impl AccountState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountState::Active => "Active",
            AccountState::Suspended => "Suspended",
            AccountState::Closed => "Closed",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_values() {
        assert_eq!(ACCOUNT_ID, 144553);
        assert_eq!(ACCOUNT_EMAIL, "shivamattri@gmail.com");
    }

    #[test]
    fn test_email_binding_is_reassignable() {
        let mut account_email = String::from(ACCOUNT_EMAIL);
        assert_eq!(account_email, ACCOUNT_EMAIL);

        account_email = String::from("updated@example.com");
        assert_eq!(account_email, "updated@example.com");
    }

    #[test]
    fn test_unassigned_state_is_not_a_domain_value() {
        let account_state: Option<AccountState> = None;

        assert!(account_state.is_none());
        assert_ne!(account_state, Some(AccountState::Active));
        assert_ne!(account_state, Some(AccountState::Suspended));
        assert_ne!(account_state, Some(AccountState::Closed));
    }

    #[test]
    fn test_state_as_str() {
        assert_eq!(AccountState::Active.as_str(), "Active");
        assert_eq!(AccountState::Suspended.as_str(), "Suspended");
        assert_eq!(AccountState::Closed.as_str(), "Closed");
    }
}
