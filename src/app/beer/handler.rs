//! 啤酒处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::{
    model::{BeerDto, BeerId},
    service::BeerService,
};
use crate::core::{error::CoreError, response::Located};

/// 默认资源路径前缀
pub const DEFAULT_BASE_PATH: &str = "/api/v1/beer";

#[derive(Clone)]
pub struct AppState {
    pub beer_service: Arc<dyn BeerService>,
    /// 资源路径前缀，用于拼接 `Location`
    pub base_path: Arc<str>,
}

impl AppState {
    pub fn new(beer_service: Arc<dyn BeerService>, base_path: impl Into<Arc<str>>) -> Self {
        Self {
            beer_service,
            base_path: base_path.into(),
        }
    }
}

/// 构建啤酒资源路由
pub fn routes(state: AppState) -> Router {
    let collection = state.base_path.to_string();
    let item = format!("{}/:id", collection);

    Router::new()
        .route(&collection, post(save_new_beer))
        .route(&item, get(get_beer_by_id).put(update_beer).delete(delete_beer))
        .with_state(state)
}

pub async fn get_beer_by_id(
    State(state): State<AppState>,
    Path(id): Path<BeerId>,
) -> Result<Json<BeerDto>, CoreError> {
    debug!("查询啤酒: {}", id);
    state
        .beer_service
        .get_beer_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::beer_not_found(id.as_str()))
}

pub async fn save_new_beer(
    State(state): State<AppState>,
    Json(beer): Json<BeerDto>,
) -> Result<Located<BeerDto>, CoreError> {
    let submitted_id = beer.id.clone();
    let cant_be_created =
        || CoreError::beer_cant_be_created(submitted_id.as_ref().map(BeerId::as_str));

    let created = state
        .beer_service
        .save_new_beer(beer)
        .await?
        .ok_or_else(&cant_be_created)?;

    // 没有标识就无法给出 Location
    let id = created.id.clone().ok_or_else(&cant_be_created)?;

    info!("已创建啤酒: {}", id);
    Ok(Located::created(&state.base_path, id.as_str(), created))
}

pub async fn update_beer(
    State(state): State<AppState>,
    Path(id): Path<BeerId>,
    Json(beer): Json<BeerDto>,
) -> Result<Located<BeerDto>, CoreError> {
    let updated = state
        .beer_service
        .update_beer(&id, beer)
        .await?
        .ok_or_else(|| CoreError::beer_not_found(id.as_str()))?;

    let location_id = updated.id.clone().unwrap_or(id);
    info!("已更新啤酒: {}", location_id);
    Ok(Located::accepted(&state.base_path, location_id.as_str(), updated))
}

pub async fn delete_beer(
    State(state): State<AppState>,
    Path(id): Path<BeerId>,
) -> Result<StatusCode, CoreError> {
    debug!("In controller - Deleting beer with id: {}", id);
    state.beer_service.delete_beer(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
