use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Presentation settings shared by the one-shot commands
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
