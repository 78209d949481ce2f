//! Command implementations

mod check;
mod issuers;

pub use check::check;
pub use issuers::issuers;
pub use self_test::self_test;
