pub mod contact;
pub mod navbar;
