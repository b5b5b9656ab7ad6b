pub mod cart;
pub mod client;
pub mod error;
pub mod price;

pub use cart::{Cart, CartContainer, CartLine, CartPanel, CART_STORAGE_KEY};
pub use client::{CafeClient, SubmissionOutcome};
pub use error::{CartError, ClientError};
