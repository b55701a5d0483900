use crate::error::Result;
use crate::rest::{encode_body, RequestOptions, RestContext};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// User represents a user record of the `/users` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates, kept as the strings the API returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Payload for creating a user; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Partial update payload. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

const USERS: &str = "/users";

fn user_path(id: impl Display) -> String {
    format!("{}/{}", USERS, id)
}

impl RestContext {
    /// List all users
    pub async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>> {
        self.request(USERS, RequestOptions::get(), token).await
    }

    /// Get a single user by id
    pub async fn get_user(&self, id: impl Display, token: Option<&str>) -> Result<User> {
        self.request(&user_path(id), RequestOptions::get(), token).await
    }

    /// Create a user and return the stored record
    pub async fn create_user(&self, user: &NewUser, token: Option<&str>) -> Result<User> {
        let body = encode_body(user)?;
        self.request(USERS, RequestOptions::post(body), token).await
    }

    /// Update a user and return the stored record
    pub async fn update_user(&self, id: impl Display, update: &UserUpdate, token: Option<&str>) -> Result<User> {
        let body = encode_body(update)?;
        self.request(&user_path(id), RequestOptions::put(body), token).await
    }

    /// Delete a user. The response body is ignored.
    pub async fn delete_user(&self, id: impl Display, token: Option<&str>) -> Result<()> {
        self.send(&user_path(id), RequestOptions::delete(), token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": {"lat": "-37.3159", "lng": "81.1496"}
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn test_user_deserialization() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        let json = serde_json::to_value(&user.company).unwrap();
        assert!(json.get("catchPhrase").is_some());
        assert!(json.get("catch_phrase").is_none());
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"email":"new@example.com"}"#);
    }

    #[test]
    fn test_user_path() {
        assert_eq!(user_path(7), "/users/7");
    }
}
