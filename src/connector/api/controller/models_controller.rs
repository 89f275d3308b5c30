use anyhow::Result;

use crate::ModelListing;

use super::super::Container;

pub struct ModelsController<'a> {
    container: &'a Container,
}

impl<'a> ModelsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn list(&self) -> Result<String> {
        let listing = self.container.list_models_use_case().execute();
        Ok(self.format_model_list(&listing))
    }

    fn format_model_list(&self, listing: &ModelListing) -> String {
        let mut output = "Supported models:\n\n".to_string();
        for name in &listing.supported_models {
            let marker = if *name == listing.default_model {
                " (default)"
            } else {
                ""
            };
            output.push_str(&format!("  {}{}\n", name, marker));
        }
        output
    }
}
