use crate::domain::{ModelCatalog, ModelInfo, ModelListing};

#[derive(Default)]
pub struct ListModelsUseCase;

impl ListModelsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> ModelListing {
        ModelListing::from_catalog()
    }

    pub fn find_by_route(&self, route: &str) -> Option<&'static ModelInfo> {
        ModelCatalog::find_by_route(route)
    }
}
