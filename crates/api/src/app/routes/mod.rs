pub mod system;
pub mod warehouse;
