mod variant_presets;

pub use variant_presets::StackVariant;
