pub mod credentials;

pub use credentials::validate_credentials;
