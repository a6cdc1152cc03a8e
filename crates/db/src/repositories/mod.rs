//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD and query
//! methods that accept `&PgPool` as the first argument and return
//! [`DbResult`](crate::DbResult) so failures arrive pre-classified.

pub mod artist_repo;
pub mod category_repo;
pub mod drink_repo;
pub mod question_repo;
pub mod shop_repo;
pub mod show_repo;
pub mod transaction_repo;
pub mod venue_repo;
pub mod wallet_user_repo;

pub use artist_repo::ArtistRepo;
pub use category_repo::CategoryRepo;
pub use drink_repo::DrinkRepo;
pub use question_repo::QuestionRepo;
pub use shop_repo::ShopRepo;
pub use show_repo::ShowRepo;
pub use transaction_repo::TransactionRepo;
pub use venue_repo::VenueRepo;
pub use wallet_user_repo::WalletUserRepo;
