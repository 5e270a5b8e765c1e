pub mod collector;
pub mod counters;
pub mod history;
pub mod platform;
pub mod process;
pub mod registry;
pub mod sample;
pub mod top;

#[cfg(test)]
pub(crate) mod testing;
