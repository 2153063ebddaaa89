//! Core types for Madrona.
//!
//! This module provides the entity types exchanged with the storefront API
//! and type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartLine, CartTotals, ShippingAddress};
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{Order, OrderContact, OrderCustomer, OrderDraft, OrderItem, PaymentResult};
pub use product::{Product, ProductPage, ProductUpdate, Review, ReviewDraft};
pub use user::{ProfileUpdate, User, UserInfo, UserUpdate};
