//! Repositories: static-method query modules over `&PgPool`.

pub mod delivery_repo;
pub mod flashcard_repo;
pub mod user_repo;

pub use delivery_repo::DeliveryRepo;
pub use flashcard_repo::FlashcardRepo;
pub use user_repo::UserRepo;
