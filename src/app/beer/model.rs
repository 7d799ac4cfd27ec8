//! 啤酒数据模型

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 啤酒标识
///
/// 不透明字符串，由创建方给出或由服务层生成。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(String);

impl BeerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 生成随机标识 (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BeerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BeerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<Uuid> for BeerId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

/// 啤酒风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

/// 啤酒 DTO
///
/// 所有字段在传输中均可缺省，创建请求可以只携带 `beerName`。
/// `created_date` 与 `last_modified_date` 由服务层写入。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default)]
    pub id: Option<BeerId>,
    #[serde(default)]
    pub beer_name: Option<String>,
    #[serde(default)]
    pub beer_style: Option<BeerStyle>,
    #[serde(default)]
    pub upc: Option<i64>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity_on_hand: Option<i32>,
    #[serde(default)]
    pub created_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub last_modified_date: Option<DateTime<FixedOffset>>,
}

impl BeerDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            beer_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<BeerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: BeerStyle) -> Self {
        self.beer_style = Some(style);
        self
    }

    pub fn with_upc(mut self, upc: i64) -> Self {
        self.upc = Some(upc);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_quantity_on_hand(mut self, quantity: i32) -> Self {
        self.quantity_on_hand = Some(quantity);
        self
    }
}
