//! Presign S3 GET requests with SigV4 query parameters.
//!
//! This crate produces time-limited URLs that grant read access to a single
//! object in a private bucket, without handing the holder any long-lived
//! credentials. The whole pipeline is a pure transformation: no network I/O
//! happens here, and the storage service can verify the URL with nothing but
//! the parameters embedded in it.
//!
//! ## Example
//!
//! ```no_run
//! use s3_presign::{Config, Presigner};
//!
//! fn main() -> s3_presign::Result<()> {
//!     let presigner = Presigner::new(Config {
//!         region: "us-east-2".to_string(),
//!         bucket: "my-bucket".to_string(),
//!         access_key_id: "access_key_id".to_string(),
//!         secret_access_key: "secret_access_key".to_string(),
//!         ..Default::default()
//!     })?;
//!
//!     let url = presigner.presign_get("uploads/doc.pdf")?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! A [`Presigner`] is immutable after construction. Signing only reads from
//! it, so one instance can be shared freely across threads or tasks.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod presign;
pub use presign::{GetObjectRequest, PresignedUrl, Presigner};

mod constants;
