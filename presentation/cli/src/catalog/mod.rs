pub mod dto;
pub mod source;
