pub mod page_dto;

pub use page_dto::{PageQuery, PageView};
