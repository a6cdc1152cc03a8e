//! Well-known permission scope constants.
//!
//! These must match the `permissions` claim values issued by the token
//! service. Route extractors compare against them verbatim.

// Menu (drinks)
pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

// Wallet users
pub const GET_ALL_USERS: &str = "get:all-users";
pub const GET_USER: &str = "get:user";
pub const POST_USER: &str = "post:user";
pub const PATCH_USER: &str = "patch:user";
pub const DELETE_USER: &str = "delete:user";
pub const GET_USER_TRANSACTIONS: &str = "get:user-transactions";
pub const POST_USER_TRANSACTIONS: &str = "post:user-transactions";

// Wallet shops
pub const GET_ALL_SHOPS: &str = "get:all-shops";
pub const GET_SHOP: &str = "get:shop";
pub const POST_SHOP: &str = "post:shop";
pub const PATCH_SHOP: &str = "patch:shop";
pub const DELETE_SHOP: &str = "delete:shop";
