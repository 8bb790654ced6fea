use moonshot_core::{Bundle, CatalogStats};

use crate::presentation::view_models::ValidationViewModel;

pub fn present_validation(bundle: &Bundle, stats: CatalogStats) -> ValidationViewModel {
    ValidationViewModel {
        source: bundle.location(),
        stats,
    }
}
