//! Payment attempt state
//!
//! Transient state of the current payment attempt. Created when the user
//! triggers payment, mutated when the provider call resolves or rejects,
//! never persisted.

/// Local payment attempt cell. At most one attempt is in flight at a
/// time; [`PaymentAttempt::begin`] enforces the guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentAttempt {
    pub in_flight: bool,
    pub tx_hash: Option<String>,
    pub error: Option<String>,
}

impl PaymentAttempt {
    /// Start a new attempt. Returns `false` if a prior attempt is still
    /// outstanding; the caller must not submit in that case. A fresh
    /// attempt clears the previous error.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// The provider resolved with a transaction hash.
    pub fn succeed(&mut self, tx_hash: String) {
        self.in_flight = false;
        self.tx_hash = Some(tx_hash);
        self.error = None;
    }

    /// The signing/broadcast path rejected. The attempt stays
    /// recoverable; the user may retry manually.
    pub fn fail(&mut self, message: String) {
        self.in_flight = false;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_guards_in_flight() {
        let mut attempt = PaymentAttempt::default();
        assert!(attempt.begin());
        // Second trigger while outstanding is refused.
        assert!(!attempt.begin());
    }

    #[test]
    fn test_success_stores_hash() {
        let mut attempt = PaymentAttempt::default();
        assert!(attempt.begin());
        attempt.succeed("0xdeadbeef".to_string());

        assert!(!attempt.in_flight);
        assert_eq!(attempt.tx_hash.as_deref(), Some("0xdeadbeef"));
        assert_eq!(attempt.error, None);
    }

    #[test]
    fn test_failure_stores_message_and_no_hash() {
        let mut attempt = PaymentAttempt::default();
        assert!(attempt.begin());
        attempt.fail("user rejected the request".to_string());

        assert!(!attempt.in_flight);
        assert_eq!(attempt.tx_hash, None);
        assert_eq!(attempt.error.as_deref(), Some("user rejected the request"));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut attempt = PaymentAttempt::default();
        assert!(attempt.begin());
        attempt.fail("user rejected the request".to_string());

        // A retry is a new, distinct attempt; the stale error is cleared.
        assert!(attempt.begin());
        assert_eq!(attempt.error, None);

        attempt.succeed("0xfeedface".to_string());
        assert_eq!(attempt.tx_hash.as_deref(), Some("0xfeedface"));
    }

    #[test]
    fn test_resolution_reopens_the_guard() {
        let mut attempt = PaymentAttempt::default();
        assert!(attempt.begin());
        attempt.succeed("0xdeadbeef".to_string());
        assert!(attempt.begin());
    }
}
