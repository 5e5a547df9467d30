//! Assertion utilities for testing

/// Assert that a result is Err and unwrap the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(err) => err,
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?} ({})", val, format!($($arg)+)),
            Err(err) => err,
        }
    };
}

/// Assert that an `IdentityResult` is `Resolved` with the given address and display text
#[macro_export]
macro_rules! assert_resolved {
    ($result:expr, $address:expr, $display:expr) => {
        match &$result {
            $crate::chainlens_types::app::IdentityResult::Resolved {
                address, display, ..
            } => {
                assert_eq!(address.as_str(), $address, "resolved address");
                assert_eq!(display.as_str(), $display, "resolved display");
            }
            other => panic!("Expected Resolved, got {:?}", other),
        }
    };
}

/// Assert that an `IdentityResult` is `Unresolved` for the given address
#[macro_export]
macro_rules! assert_unresolved {
    ($result:expr, $address:expr) => {
        match &$result {
            $crate::chainlens_types::app::IdentityResult::Unresolved { address } => {
                assert_eq!(address.as_str(), $address, "unresolved address");
            }
            other => panic!("Expected Unresolved, got {:?}", other),
        }
    };
}
