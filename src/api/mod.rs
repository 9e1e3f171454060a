//! Contact API client module

mod client;
mod traits;

pub use client::{ContactClient, ContactError, DEFAULT_BASE_URL};
pub use traits::ContactApi;

#[cfg(test)]
pub use traits::MockContactApi;
