//! 啤酒业务服务

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::{BeerDto, BeerId, BeerStyle};
use crate::core::error::CoreError;

/// 啤酒服务接口
///
/// 控制器只依赖这四个操作，持久化与并发控制由实现方负责。
#[async_trait]
pub trait BeerService: Send + Sync {
    async fn get_beer_by_id(&self, id: &BeerId) -> Result<Option<BeerDto>, CoreError>;

    async fn save_new_beer(&self, beer: BeerDto) -> Result<Option<BeerDto>, CoreError>;

    async fn update_beer(&self, id: &BeerId, beer: BeerDto) -> Result<Option<BeerDto>, CoreError>;

    /// 标识不存在时返回 `CoreError::NotFound`
    async fn delete_beer(&self, id: &BeerId) -> Result<(), CoreError>;
}

/// 基于内存的服务实现
#[derive(Default)]
pub struct InMemoryBeerService {
    beers: RwLock<HashMap<BeerId, BeerDto>>,
}

impl InMemoryBeerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带示例数据的实例
    pub async fn with_sample_data() -> Result<Self, CoreError> {
        let service = Self::new();
        let samples = [
            BeerDto::new("Galaxy Cat")
                .with_style(BeerStyle::PaleAle)
                .with_upc(337010000001)
                .with_quantity_on_hand(122),
            BeerDto::new("Mango Bobs")
                .with_style(BeerStyle::Ipa)
                .with_upc(337010000002)
                .with_quantity_on_hand(48),
            BeerDto::new("No Hammers On The Bar")
                .with_style(BeerStyle::Stout)
                .with_upc(337010000003)
                .with_quantity_on_hand(250),
        ];
        for beer in samples {
            let name = beer.beer_name.clone();
            if service.save_new_beer(beer).await?.is_none() {
                return Err(CoreError::InternalServerError(format!(
                    "示例数据写入失败: {}",
                    name.unwrap_or_default()
                )));
            }
        }
        Ok(service)
    }

    pub async fn len(&self) -> usize {
        self.beers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.beers.read().await.is_empty()
    }
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

#[async_trait]
impl BeerService for InMemoryBeerService {
    async fn get_beer_by_id(&self, id: &BeerId) -> Result<Option<BeerDto>, CoreError> {
        Ok(self.beers.read().await.get(id).cloned())
    }

    async fn save_new_beer(&self, mut beer: BeerDto) -> Result<Option<BeerDto>, CoreError> {
        let id = beer.id.take().unwrap_or_else(BeerId::generate);
        let mut beers = self.beers.write().await;

        if beers.contains_key(&id) {
            debug!("啤酒 {} 已存在，拒绝创建", id);
            return Ok(None);
        }

        let timestamp = now();
        beer.id = Some(id.clone());
        beer.created_date = Some(timestamp);
        beer.last_modified_date = Some(timestamp);

        beers.insert(id, beer.clone());
        Ok(Some(beer))
    }

    async fn update_beer(&self, id: &BeerId, beer: BeerDto) -> Result<Option<BeerDto>, CoreError> {
        let mut beers = self.beers.write().await;

        let Some(existing) = beers.get_mut(id) else {
            return Ok(None);
        };

        // 整体替换，标识与创建时间保持不变
        *existing = BeerDto {
            id: Some(id.clone()),
            created_date: existing.created_date,
            last_modified_date: Some(now()),
            ..beer
        };

        Ok(Some(existing.clone()))
    }

    async fn delete_beer(&self, id: &BeerId) -> Result<(), CoreError> {
        match self.beers.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(CoreError::beer_not_found(id.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamps() {
        let service = InMemoryBeerService::new();

        let saved = service
            .save_new_beer(BeerDto::new("New Beer"))
            .await
            .unwrap()
            .unwrap();

        let id = saved.id.clone().expect("id assigned");
        assert!(saved.created_date.is_some());
        assert_eq!(saved.created_date, saved.last_modified_date);

        let fetched = service.get_beer_by_id(&id).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[tokio::test]
    async fn test_save_keeps_client_id() {
        let service = InMemoryBeerService::new();
        let id = BeerId::new("b1");

        let saved = service
            .save_new_beer(BeerDto::new("Client Beer").with_id(id.clone()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.id, Some(id.clone()));

        // 重复 id 创建失败
        let again = service
            .save_new_beer(BeerDto::new("Duplicate").with_id(id))
            .await
            .unwrap();
        assert!(again.is_none());
        assert_eq!(service.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let service = InMemoryBeerService::new();
        let saved = service
            .save_new_beer(BeerDto::new("Old Name"))
            .await
            .unwrap()
            .unwrap();
        let id = saved.id.clone().unwrap();

        let update = BeerDto::new("Updated Beer")
            .with_id("someone-else")
            .with_style(BeerStyle::Lager);
        let updated = service.update_beer(&id, update).await.unwrap().unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.beer_name.as_deref(), Some("Updated Beer"));
        assert_eq!(updated.beer_style, Some(BeerStyle::Lager));
        assert_eq!(updated.created_date, saved.created_date);
        assert!(updated.last_modified_date >= saved.last_modified_date);
    }

    #[tokio::test]
    async fn test_update_unknown_returns_none() {
        let service = InMemoryBeerService::new();
        let result = service
            .update_beer(&BeerId::new("ghost"), BeerDto::new("Ghost"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sample_data() {
        let service = InMemoryBeerService::with_sample_data().await.unwrap();
        assert_eq!(service.len().await, 3);
        assert!(!service.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = InMemoryBeerService::with_sample_data().await.unwrap();

        let missing = BeerId::new("missing");
        assert_eq!(
            service.delete_beer(&missing).await,
            Err(CoreError::beer_not_found("missing"))
        );

        let id = service
            .save_new_beer(BeerDto::new("Short Lived"))
            .await
            .unwrap()
            .and_then(|beer| beer.id)
            .unwrap();
        service.delete_beer(&id).await.unwrap();
        assert!(service.get_beer_by_id(&id).await.unwrap().is_none());
        assert_eq!(service.len().await, 3);
    }
}
