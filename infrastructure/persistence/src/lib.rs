pub mod storage {
    pub mod error;
    pub mod file;
    pub mod key_value;
    pub mod memory;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
