//! # Shared Utility Functions
//!
//! Address formatting helpers used by the widget's connected view.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
//! assert_eq!(truncate_address(address), "0x036C...CF7e");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is
/// returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
/// assert_eq!(format_address(addr, 6, 4), "0x036C...CF7e");
/// assert_eq!(format_address(addr, 10, 8), "0x036CbD53...8f3dCF7e");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Return early if the address is too short to truncate meaningfully.
    // Also guard against individual lengths exceeding the address length.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: hex addresses are ASCII-only and the bounds were
    // checked above.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix (the 0x
/// tag plus four hex digits) and 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
/// assert_eq!(truncate_address(addr), "0x036C...CF7e");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
        assert_eq!(format_address(addr, 6, 4), "0x036C...CF7e");
        assert_eq!(format_address(addr, 4, 4), "0x03...CF7e");
        assert_eq!(format_address(addr, 2, 2), "0x...7e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
        assert_eq!(truncate_address(addr), "0x036C...CF7e");
    }
}
