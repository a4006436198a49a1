use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    AccessTokenResponse, LoginRequest, MessageResponse, SignupRequest,
};
use crate::modules::users::model::UserInfoResponse;
use crate::modules::writeups::model::{
    CreateWriteupDto, LikesResponse, Writeup, WriteupWithAuthor,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh_token,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::get_user_info,
        crate::modules::writeups::controller::get_writeups,
        crate::modules::writeups::controller::get_my_claims,
        crate::modules::writeups::controller::create_writeup,
        crate::modules::writeups::controller::like_writeup,
        crate::modules::writeups::controller::unlike_writeup,
        crate::modules::writeups::controller::claim_writeup,
        crate::modules::writeups::controller::unclaim_writeup,
        crate::modules::writeups::controller::delete_writeup,
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            AccessTokenResponse,
            MessageResponse,
            ErrorResponse,
            UserInfoResponse,
            Writeup,
            WriteupWithAuthor,
            CreateWriteupDto,
            LikesResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, login, token refresh, and logout"),
        (name = "Users", description = "Authenticated user profile"),
        (name = "Writeups", description = "Writeups, likes, and bottle claims")
    ),
    info(
        title = "Driftbottle API",
        version = "0.1.0",
        description = "REST backend for a message-in-a-bottle writeup sharing app, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
