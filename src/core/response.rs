//! 核心响应处理模块

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::warn;

/// 带 `Location` 头的响应，用于创建和更新
pub struct Located<T> {
    pub status: StatusCode,
    pub location: String,
    pub body: T,
}

impl<T> Located<T> {
    /// 201 Created
    pub fn created(base_path: &str, id: &str, body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: resource_path(base_path, id),
            body,
        }
    }

    /// 202 Accepted
    pub fn accepted(base_path: &str, id: &str, body: T) -> Self {
        Self {
            status: StatusCode::ACCEPTED,
            location: resource_path(base_path, id),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Located<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        match HeaderValue::from_str(&self.location) {
            Ok(value) => {
                response.headers_mut().insert(header::LOCATION, value);
            }
            Err(e) => warn!("无法写入 Location 头 {:?}: {}", self.location, e),
        }
        response
    }
}

/// `{base_path}/{id}`
pub fn resource_path(base_path: &str, id: &str) -> String {
    format!("{}/{}", base_path, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_sets_location() {
        let id = uuid::Uuid::new_v4().to_string();
        let response = Located::created("/api/v1/beer", &id, serde_json::json!({})).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            &format!("/api/v1/beer/{}", id)
        );
    }

    #[test]
    fn test_accepted_status() {
        let located = Located::accepted("/beers", "b1", ());
        assert_eq!(located.status, StatusCode::ACCEPTED);
        assert_eq!(located.location, "/beers/b1");
    }

    #[test]
    fn test_invalid_location_is_omitted() {
        let response = Located::created("/beers", "bad\nid", ()).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
