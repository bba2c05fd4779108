//! Application state module

mod app_state;
mod forms;
mod policy;

pub use app_state::*;
pub use forms::*;
pub use policy::*;

#[cfg(test)]
pub(crate) use forms::write_fixture;
