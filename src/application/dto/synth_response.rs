use crate::stack_definition::domain::SynthesizedStack;

/// SynthResponse - Output DTO from the synthesis use case
#[derive(Debug, Clone)]
pub struct SynthResponse {
    /// The validated stack, ready for a formatter
    pub stack: SynthesizedStack,
    /// Non-fatal findings already reported to the user
    pub warnings: Vec<String>,
}

impl SynthResponse {
    pub fn new(stack: SynthesizedStack, warnings: Vec<String>) -> Self {
        Self { stack, warnings }
    }

    pub fn resource_count(&self) -> usize {
        self.stack.template().resources().len()
    }
}
