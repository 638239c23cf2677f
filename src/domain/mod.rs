// Currency display rules
pub mod currency;

// Domain-specific error types
pub mod errors;

// Property feature definitions
pub mod features;
