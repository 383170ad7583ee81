mod list_repository;

pub use list_repository::ListRepository;
