use serde::{Deserialize, Serialize};

/// 一次查詢的結果；只用來產生畫面，之後即丟棄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub name: String,
    pub id: u32,
    /// 單位：公寸
    pub height: u32,
    /// 單位：百公克
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    /// API 對部分紀錄會回 null
    pub base_experience: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl LookupResult {
    /// 依輸入順序取出分類名稱
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }
}
