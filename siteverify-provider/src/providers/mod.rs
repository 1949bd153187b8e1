//! Verification authority implementations

mod google;

pub use google::GoogleSiteVerification;
