//! How the roost `POST /users` handler consumes validated input.
//!
//! Run: `RUST_LOG=debug cargo run -p roost-validator --example user_registration`

use roost_validator::object;
use roost_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const MISSING_AVATAR: &str = "https://static-cdn.mastodon.social/avatars/original/missing.png";

/// The fields a client may send when registering.
#[derive(Debug, Deserialize)]
struct NewUser {
    username: String,
    name: String,
    summary: String,
}

/// A stored user: the registration fields plus server-assigned ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    username: String,
    name: String,
    summary: String,
    published: String,
    profile_picture: String,
    following: Vec<String>,
    followers: Vec<String>,
}

fn new_user() -> impl Validate<Input = Value, Output = NewUser> {
    object! {
        username: string(),
        name: string(),
        summary: fallback(string(), String::new),
    }
    .typed::<NewUser>()
}

/// Schema for the flat-file database; a missing or damaged `users` list is
/// read as empty.
fn database() -> impl Validate<Input = Value, Output = Vec<User>> {
    json(object! {
        users: fallback(
            array_of(object! {
                username: string(),
                name: string(),
                summary: fallback(string(), String::new),
                published: string(),
                profilePicture: fallback(string(), || MISSING_AVATAR.to_owned()),
                following: fallback(array_of(string()), Vec::new),
                followers: fallback(array_of(string()), Vec::new),
            }),
            Vec::new,
        ),
    })
    .map(|db| db.get("users").cloned().unwrap_or_default())
    .typed::<Vec<User>>()
}

/// Mirrors the handler: 400 on invalid input, 409 on a taken username,
/// 200 otherwise.
fn register(users: &mut Vec<User>, body: &Value) -> (u16, Value) {
    let new_user = match new_user().validate(body) {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                failures = err.leaves().len(),
                error = %err.to_json_value(),
                "rejected registration"
            );
            return (400, json!({"error": "invalid request"}));
        }
    };

    if users.iter().any(|u| u.username == new_user.username) {
        return (409, json!({"error": "username taken"}));
    }

    users.push(User {
        username: new_user.username,
        name: new_user.name,
        summary: new_user.summary,
        published: "2024-01-01T00:00:00.000Z".to_owned(),
        profile_picture: MISSING_AVATAR.to_owned(),
        following: Vec::new(),
        followers: Vec::new(),
    });
    (200, json!({"success": true}))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stored = json!(r#"{"users": [{"username": "ada", "name": "Ada", "published": "2023-05-01T10:00:00.000Z"}]}"#);
    let mut users = match database().validate(&stored) {
        Ok(users) => users,
        Err(err) => {
            tracing::error!(%err, "database file is unreadable");
            Vec::new()
        }
    };
    println!("loaded {} user(s): {:?}", users.len(), users.first());

    let requests = [
        json!({"username": "bob", "name": "Bob", "admin": true}),
        json!({"username": "ada", "name": "Ada again"}),
        json!({"username": 7, "summary": ["not", "text"]}),
        json!("not an object"),
    ];

    for body in &requests {
        let (status, response) = register(&mut users, body);
        println!("POST /users {body} -> {status} {response}");
    }

    println!("database: {:#}", json!({ "users": users }));
}
