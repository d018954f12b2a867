pub mod handlers;
pub mod intake;
pub mod sanitize;
pub mod validation;
