use llm_battle::{
    builder::LLMBuilder,
    config::{BattleConfig, ContenderConfig},
    contender::Contender,
    credentials::resolve_api_key,
    error::LLMError,
};

/// Builds one contender per configured model, in configuration order.
pub fn build_contenders(config: &BattleConfig) -> Result<Vec<Contender>, LLMError> {
    config
        .contenders
        .iter()
        .map(|entry| build_contender(entry, config.timeout_seconds))
        .collect()
}

fn build_contender(entry: &ContenderConfig, timeout_seconds: u64) -> Result<Contender, LLMError> {
    let backend = entry.model.backend();
    let api_key = resolve_api_key(&backend, entry.api_key_env.as_deref());

    let mut builder = LLMBuilder::new()
        .backend(backend)
        .model(entry.model.model_id())
        .api_key_secret(api_key)
        .timeout_seconds(timeout_seconds);
    if let Some(url) = &entry.base_url {
        builder = builder.base_url(url.clone());
    }
    if let Some(temperature) = entry.temperature {
        builder = builder.temperature(temperature);
    }

    let name = entry.display_name();
    log::info!("Contender {name}: {backend} model {}", entry.model.model_id());
    Ok(Contender::new(name, builder.build()?))
}
