//! Record shapes served by the upstream fake-data REST API.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The response envelope wrapping every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub status: String,
    pub code: u16,
    pub locale: String,
    #[serde(default)]
    pub seed: Option<String>,
    /// Number of records the upstream generated, independent of any client-side filter.
    pub total: usize,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub uuid: Uuid,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub username: String,
    // Never shipped to the browser.
    #[serde(default, skip_serializing)]
    pub password: String,
    pub email: String,
    pub ip: String,
    pub mac_address: String,
    pub website: String,
    pub image: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// The username, or "N/A" when the upstream left it blank.
    pub fn display_username(&self) -> &str {
        if self.username.is_empty() {
            "N/A"
        } else {
            &self.username
        }
    }
}

/// A book record, shown on the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub isbn: String,
    pub image: String,
    pub published: Date,
    pub publisher: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS_BODY: &str = r#"{
        "status": "OK",
        "code": 200,
        "locale": "en_US",
        "seed": null,
        "total": 1,
        "data": [{
            "id": 1,
            "uuid": "0f9c3e3a-5a47-4c7b-9d0e-6f6b8a3a1c2d",
            "firstname": "Ada",
            "lastname": "Lovelace",
            "username": "",
            "password": "hunter2",
            "email": "ada@example.com",
            "ip": "10.0.0.1",
            "macAddress": "00:1b:44:11:3a:b7",
            "website": "http://ada.example.com",
            "image": "http://placeimg.com/640/480/people"
        }]
    }"#;

    const BOOKS_BODY: &str = r#"{
        "status": "OK",
        "code": 200,
        "locale": "en_US",
        "seed": "1234",
        "total": 1,
        "data": [{
            "id": 7,
            "title": "Analytical Engines",
            "author": "Charles Babbage",
            "genre": "Science",
            "description": "Notes on the engine.",
            "isbn": "9781234567897",
            "image": "http://placeimg.com/480/640/any",
            "published": "1843-10-01",
            "publisher": "Taylor"
        }]
    }"#;

    #[test]
    fn decodes_user_envelope() {
        let envelope: ListEnvelope<User> = serde_json::from_str(USERS_BODY).unwrap();

        assert_eq!(envelope.total, 1);
        assert_eq!(envelope.seed, None);

        let user = &envelope.data[0];
        assert_eq!(user.mac_address, "00:1b:44:11:3a:b7");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.display_username(), "N/A");
    }

    #[test]
    fn password_is_not_serialized() {
        let envelope: ListEnvelope<User> = serde_json::from_str(USERS_BODY).unwrap();
        assert_eq!(envelope.data[0].password, "hunter2");

        let json = serde_json::to_string(&envelope).unwrap();
        assert!(!json.contains("hunter2"));

        let back: ListEnvelope<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data[0].password, "");
    }

    #[test]
    fn decodes_book_envelope() {
        let envelope: ListEnvelope<Book> = serde_json::from_str(BOOKS_BODY).unwrap();

        assert_eq!(envelope.seed.as_deref(), Some("1234"));
        assert_eq!(envelope.data[0].published, jiff::civil::date(1843, 10, 1));
    }
}
