// Wire types for the books/orders demo API

use serde::{Deserialize, Serialize};

/// Service health payload (`GET /status`, 200)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    pub status: String,
}

/// Book category; the service spells it in kebab-case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookType {
    Fiction,
    NonFiction,
}

impl BookType {
    /// Value used in the `type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            BookType::Fiction => "fiction",
            BookType::NonFiction => "non-fiction",
        }
    }
}

/// Listing filter (`GET /books?type=&limit=`)
///
/// A `limit` of 0 or above 20 is rejected by the service with a 400; the
/// query is passed through as given so suites can assert that behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBooksQuery {
    pub book_type: Option<BookType>,
    pub limit: Option<u32>,
}

impl ListBooksQuery {
    /// Query pairs in the order the service documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(book_type) = self.book_type {
            pairs.push(("type", book_type.as_param().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Listing row (`GET /books`, 200)
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummary {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub available: bool,
}

/// Full resource (`GET /books/{id}`, 200; unknown id yields 404)
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub price: f64,
    #[serde(rename = "current-stock")]
    pub current_stock: u32,
    pub available: bool,
}

/// Client registration request (`POST /api-clients`, 201)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistration {
    pub client_name: String,
    pub client_email: String,
}

/// Bearer token issued on registration; sent as `Authorization: Bearer ...`
/// on order operations (missing or bad token yields 401)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}

/// Order creation request (`POST /orders`, 201)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub book_id: u64,
    pub customer_name: String,
}

/// Order creation response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub created: bool,
    pub order_id: String,
}

/// Stored order (`GET /orders/{id}`, 200)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub book_id: u64,
    pub customer_name: String,
    pub created_by: String,
    pub quantity: u32,
    pub timestamp: u64,
}

/// Order update request (`PATCH /orders/{id}`, 204 on success)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub customer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_payload() {
        let status: ApiStatus = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert_eq!(status.status, "OK");
    }

    #[test]
    fn test_listing_payload() {
        let body = r#"[
            {"id":1,"name":"The Russian","type":"fiction","available":true},
            {"id":5,"name":"Untamed","type":"non-fiction","available":false}
        ]"#;
        let books: Vec<BookSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].book_type, BookType::Fiction);
        assert_eq!(books[1].book_type, BookType::NonFiction);
        assert!(!books[1].available);
    }

    #[test]
    fn test_single_book_payload() {
        let body = r#"{
            "id": 1,
            "name": "The Russian",
            "author": "James Patterson and James O. Born",
            "isbn": "1780899475",
            "type": "fiction",
            "price": 12.98,
            "current-stock": 495,
            "available": true
        }"#;
        let book: Book = serde_json::from_str(body).unwrap();
        assert_eq!(book.author, "James Patterson and James O. Born");
        assert_eq!(book.current_stock, 495);
        assert_eq!(book.isbn.as_deref(), Some("1780899475"));
    }

    #[test]
    fn test_book_without_isbn() {
        let body = r#"{
            "id": 3,
            "name": "Viscount Who Loved Me",
            "author": "Julia Quinn",
            "type": "fiction",
            "price": 15.6,
            "current-stock": 0,
            "available": false
        }"#;
        let book: Book = serde_json::from_str(body).unwrap();
        assert!(book.isbn.is_none());
    }

    #[test]
    fn test_client_registration_wire_casing() {
        let registration = ClientRegistration {
            client_name: "Postman".to_string(),
            client_email: "valentin@example.com".to_string(),
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["clientName"], "Postman");
        assert_eq!(json["clientEmail"], "valentin@example.com");
    }

    #[test]
    fn test_access_token_payload() {
        let token: AccessToken =
            serde_json::from_str(r#"{"accessToken":"8ce42f5a9e"}"#).unwrap();
        assert_eq!(token.access_token, "8ce42f5a9e");
    }

    #[test]
    fn test_new_order_wire_casing() {
        let order = NewOrder {
            book_id: 1,
            customer_name: "John".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["bookId"], 1);
        assert_eq!(json["customerName"], "John");
    }

    #[test]
    fn test_order_receipt_payload() {
        let receipt: OrderReceipt =
            serde_json::from_str(r#"{"created":true,"orderId":"PF6MflPDcuhWobZcgmJy5"}"#).unwrap();
        assert!(receipt.created);
        assert_eq!(receipt.order_id, "PF6MflPDcuhWobZcgmJy5");
    }

    #[test]
    fn test_stored_order_payload() {
        let body = r#"{
            "id": "PF6MflPDcuhWobZcgmJy5",
            "bookId": 1,
            "customerName": "John",
            "createdBy": "b9a1409c-937c-4e2c-b892-59c510cb871d",
            "quantity": 1,
            "timestamp": 1648565619437
        }"#;
        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.book_id, 1);
        assert_eq!(order.quantity, 1);
    }

    #[test]
    fn test_query_pairs_full() {
        let query = ListBooksQuery {
            book_type: Some(BookType::NonFiction),
            limit: Some(5),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![("type", "non-fiction".to_string()), ("limit", "5".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_default_is_empty() {
        assert!(ListBooksQuery::default().to_query_pairs().is_empty());
    }
}
