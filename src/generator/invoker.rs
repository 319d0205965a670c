use crate::generator::client::{Generator, GeneratorError, RawResponse};
use crate::generator::prompt::{InfraType, build_prompt};

/// Builds the prompt for an instruction and runs the generator once
pub struct GeneratorInvoker {
    generator: Box<dyn Generator>,
}

impl GeneratorInvoker {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self { generator }
    }

    pub async fn invoke(
        &self,
        instruction: &str,
        infra_type: &InfraType,
    ) -> Result<RawResponse, GeneratorError> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(GeneratorError::EmptyInstruction);
        }

        let prompt = build_prompt(instruction, infra_type);
        tracing::debug!(%prompt, "invoking generator");

        // No retry: one call, one response
        self.generator.generate(&prompt).await
    }
}
