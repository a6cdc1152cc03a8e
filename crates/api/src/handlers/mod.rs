//! Request handlers, one submodule per resource surface.
//!
//! Bespoke surfaces (venues, artists, trivia, drinks) provide hand-written
//! async handler functions that delegate to the corresponding repository in
//! `medley_db` and map errors via [`AppError`](crate::error::AppError).
//! Plain CRUD surfaces (wallet users, shops) implement
//! [`Resource`](crate::resource::Resource) instead and mount the generic
//! handler set.

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod quiz;
pub mod shop;
pub mod show;
pub mod transaction;
pub mod venue;
pub mod wallet_user;
