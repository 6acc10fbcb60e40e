//! External books/orders API payloads
//!
//! The public demo REST service the suites assert against is external and
//! fixed; these are the typed shapes of its requests and responses, with
//! the wire casing the service uses. Transport belongs to the caller's
//! HTTP client.

mod types;

pub use types::{
    AccessToken, ApiStatus, Book, BookSummary, BookType, ClientRegistration, ListBooksQuery,
    NewOrder, Order, OrderPatch, OrderReceipt,
};
