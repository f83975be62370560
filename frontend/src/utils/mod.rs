pub mod pagination;
pub mod storage;
