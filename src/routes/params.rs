use axum::{extract::Path, extract::FromRequestParts};

use crate::error::AppError;

/// `Path` extractor whose rejection renders as a JSON `{"msg": ...}` 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct IdPath<T>(pub T);
