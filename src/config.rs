use galeria_core::PageSelectors;

pub const VERBOSE_KEY: &str = "galeria.debug.verbose";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnhanceConfig {
    pub selectors: PageSelectors,
    pub verbose: bool,
}

pub fn load_config() -> EnhanceConfig {
    EnhanceConfig {
        selectors: PageSelectors::default(),
        verbose: read_storage_flag(VERBOSE_KEY).unwrap_or(false),
    }
}

fn read_storage_flag(key: &str) -> Option<bool> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    parse_flag(&raw)
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
