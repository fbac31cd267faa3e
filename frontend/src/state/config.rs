use crate::config::{self, ResetConfig};
use leptos::*;

pub fn provide_config(config: ResetConfig) {
    provide_context(config);
}

/// Config from context, seeded from the resolved runtime config when absent.
pub fn use_config() -> ResetConfig {
    match use_context::<ResetConfig>() {
        Some(ctx) => ctx,
        None => {
            let seeded = config::current();
            provide_context(seeded.clone());
            seeded
        }
    }
}
