pub mod contact;
pub mod portfolio;
pub mod status;
