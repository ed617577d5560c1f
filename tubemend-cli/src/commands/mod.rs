pub mod check;
pub mod fetch;
pub mod fix;
