use moonshot_core::CatalogStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationViewModel {
    pub source: String,
    #[serde(flatten)]
    pub stats: CatalogStats,
}
