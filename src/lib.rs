//! # restfetch - minimal async JSON REST client
//!
//! A small client for JSON REST APIs. It issues requests against a
//! configured base URL, optionally authenticates them with a bearer token,
//! and decodes the JSON response into the caller's type.
//!
//! ## Features
//!
//! - One generic request operation with header merging and JSON decoding
//! - Field search (`<field>_like=<term>`) and filter/sort/pagination helpers
//! - Typed helpers for the `/users` resource
//! - Errors carry the HTTP status, or the transport/decode error unchanged
//!
//! ## Basic Usage
//!
//! ```no_run
//! use restfetch::{RequestOptions, RestContext, User};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = RestContext::new()?;
//!
//!     let user: User = ctx.request("/users/1", RequestOptions::get(), None).await?;
//!     println!("User: {} ({})", user.name, user.email);
//!     Ok(())
//! }
//! ```
//!
//! ## Filtering and pagination
//!
//! ```no_run
//! use restfetch::{FilterOptions, Filters, RestContext, SortOrder, User};
//!
//! # async fn run() -> restfetch::Result<()> {
//! let ctx = RestContext::new()?;
//!
//! let mut filters = Filters::new();
//! filters.insert("username".to_string(), "Bret".into());
//!
//! let options = FilterOptions::new().sort_by("name").order(SortOrder::Asc).limit(5);
//! let users: Vec<User> = ctx.fetch_filtered_data("users", &filters, &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrent requests
//!
//! Calls share no mutable state, so independent requests can be joined:
//!
//! ```no_run
//! # async fn run() -> restfetch::Result<()> {
//! let ctx = restfetch::RestContext::new()?;
//! let (first, second) = tokio::join!(ctx.get_user(1, None), ctx.get_user(2, None));
//! println!("{} / {}", first?.name, second?.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod rest;
pub mod users;

// Re-export main types for convenience
pub use client::Config;
pub use error::{RestError, Result};
pub use query::{FilterOptions, FilterValue, Filters, SortOrder};
pub use rest::{encode_body, RequestOptions, RestContext};
pub use users::{Address, Company, Geo, NewUser, User, UserUpdate};

// Re-export for building requests without a direct reqwest dependency
pub use reqwest::Method;
