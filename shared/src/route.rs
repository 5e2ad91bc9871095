use crate::url_state::{decode_component, encode_component};

/// Pages the viewer can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    MapList,
    Map(String),
    NotFound,
}

pub const NOT_FOUND_PATH: &str = "/404";

impl Route {
    /// Resolve a location pathname. The map name is percent-decoded; unknown paths
    /// land on [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::MapList;
        }

        match trimmed.strip_prefix("/map/") {
            Some(name) if !name.is_empty() && !name.contains('/') => decode_component(name)
                .map(Self::Map)
                .unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::MapList => "/".to_string(),
            Self::Map(name) => format!("/map/{}", encode_component(name)),
            Self::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }
}
