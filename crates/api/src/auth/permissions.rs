use crate::auth::Claims;
use async_graphql::{Context, Error, Result};

/// User id of the authenticated caller, or an error for anonymous requests.
pub fn require_user_id(ctx: &Context<'_>) -> Result<i32> {
    let claims = ctx
        .data::<Claims>()
        .map_err(|_| Error::new("Not authenticated"))?;

    claims
        .user_id()
        .map_err(|e| Error::new(format!("Invalid user ID: {}", e)))
}

/// Like `require_user_id` but anonymous callers yield `None`.
pub fn current_user_id(ctx: &Context<'_>) -> Result<Option<i32>> {
    match ctx.data_opt::<Claims>() {
        Some(claims) => claims
            .user_id()
            .map(Some)
            .map_err(|e| Error::new(format!("Invalid user ID: {}", e))),
        None => Ok(None),
    }
}
