pub mod broker;
pub mod session;
