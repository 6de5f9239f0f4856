pub mod dates;
pub mod repository;
pub mod todo;
