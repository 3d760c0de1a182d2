//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step mutations
//! (association resolution + insert, detach + delete, resolve + patch)
//! own a `pool.begin()` transaction so every step commits or none does.

pub mod actor_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
