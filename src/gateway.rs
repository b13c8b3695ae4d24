pub mod factory;
pub mod google;
pub mod volumes;
#[cfg(test)]
pub(crate) mod memory;
