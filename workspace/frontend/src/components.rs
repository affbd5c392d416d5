pub mod demo;
pub mod layout;
pub mod wizard;
