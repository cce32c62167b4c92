pub mod categories;
pub mod category;
pub mod home;
pub mod not_found;
pub mod problem;
pub mod problems;
pub mod tag;
