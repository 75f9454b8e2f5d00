//! Users API handlers.
//!
//! ```text
//! POST   /users        {"name":"Ada","email":"ada@example.com","age":36}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Ada L.","email":"ada@example.com","age":37}
//! DELETE /users/{id}
//! ```
//!
//! `{id}` only matches ASCII digits; anything else never reaches a handler and
//! gets Actix's default 404.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, User, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_user_id, user_validation_error,
};

const NAME_FIELD: FieldName = FieldName::new("name");
const EMAIL_FIELD: FieldName = FieldName::new("email");
const AGE_FIELD: FieldName = FieldName::new("age");

/// Request body for create and full-overwrite update.
///
/// Every field is required; they are optional here so an absent field is
/// reported by name rather than as a generic decode failure. Unknown fields,
/// including `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = 36, minimum = 0)]
    pub age: Option<i64>,
}

impl UserRequest {
    /// Check presence, then validate through the domain constructors.
    fn into_profile(self) -> ApiResult<UserProfile> {
        let name = self.name.ok_or_else(|| missing_field_error(NAME_FIELD))?;
        let email = self.email.ok_or_else(|| missing_field_error(EMAIL_FIELD))?;
        let age = self.age.ok_or_else(|| missing_field_error(AGE_FIELD))?;
        UserProfile::try_from_parts(name, email, age).map_err(user_validation_error)
    }
}

/// Stored user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = 36)]
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let (id, profile) = user.into_parts();
        Self {
            id: id.get(),
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            age: profile.age().get(),
        }
    }
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body or invalid field", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let profile = payload.into_inner().into_profile()?;
    let user = state.users.create(&profile).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user.
///
/// Every lookup failure answers 404, storage faults included; the cause is
/// logged before it is collapsed.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user or lookup failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id:[0-9]+}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path)?;
    let user = state.users.get(id).await.map_err(|err| {
        if err.code() == ErrorCode::NotFound {
            return err;
        }
        error!(user_id = %id, error = %err, "user lookup failed; answering not found");
        Error::not_found(format!("user {id} not found"))
    })?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Malformed body or invalid field", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id:[0-9]+}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path)?;
    let profile = payload.into_inner().into_profile()?;
    let user = state.users.update(id, &profile).await?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user. Deleting an unknown id still succeeds.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted or never existed"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id:[0-9]+}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    // Digit strings that are not valid ids cannot name a row, so there is
    // nothing to delete.
    let Ok(id) = parse_user_id(&path) else {
        return Ok(HttpResponse::NoContent().finish());
    };
    state.users.delete(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(HttpResponse::NoContent().finish())
}
