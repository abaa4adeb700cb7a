#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Body for `POST /registro`.
///
/// The backend speaks Spanish field names; the serde renames pin the wire
/// contract while the struct stays idiomatic.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub password: String,
}

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body: `{token, user}`.
///
/// `token` is optional on purpose — a 2xx response without a token is a
/// real case the login flow must reject before persisting anything.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

/// Server-side user record.
///
/// Only `rol` drives client behavior; the rest of the record is kept
/// loosely typed and extra server fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct User {
    #[serde(default)]
    pub rol: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
