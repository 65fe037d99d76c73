pub mod components;
pub mod layout;
pub mod pages;

pub use components::*;
pub use pages::*;
