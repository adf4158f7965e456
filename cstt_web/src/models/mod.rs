pub mod contact;
pub mod inquiry;
