pub mod repo;

pub use repo::Meal;
