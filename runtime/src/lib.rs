mod error;
pub use error::RuntimeError;

mod lookup;
pub use lookup::{search, LookupResult};

mod session;
pub use session::Session;

pub use roster_common::*;

#[cfg(test)]
mod tests;
