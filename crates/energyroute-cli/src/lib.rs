//! energyroute CLI library.
//!
//! Terminal styling and output formatting shared by the `energyroute` binary.

pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
