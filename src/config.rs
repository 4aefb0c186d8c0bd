//! Card Source Configuration
//!
//! Read from a JSON `<script id="card-slider-config">` in the host page,
//! falling back to `CARD_SLIDER_*` variables captured at build time.

use card_source::{ConfigError, SourceConfig};

const CONFIG_ELEMENT_ID: &str = "card-slider-config";

/// Build-time values
#[derive(Default)]
struct EnvValues<'a> {
    base_url: Option<&'a str>,
    table_id: Option<&'a str>,
    view_id: Option<&'a str>,
    token: Option<&'a str>,
    page_size: Option<&'a str>,
}

/// Resolve the source configuration for this page
pub fn load_source_config() -> Result<SourceConfig, ConfigError> {
    resolve_config(
        config_from_document().as_deref(),
        EnvValues {
            base_url: option_env!("CARD_SLIDER_BASE_URL"),
            table_id: option_env!("CARD_SLIDER_TABLE_ID"),
            view_id: option_env!("CARD_SLIDER_VIEW_ID"),
            token: option_env!("CARD_SLIDER_TOKEN"),
            page_size: option_env!("CARD_SLIDER_PAGE_SIZE"),
        },
    )
}

/// Page JSON wins when it has any content; otherwise the build-time values
fn resolve_config(page_json: Option<&str>, env: EnvValues) -> Result<SourceConfig, ConfigError> {
    match page_json.filter(|json| !json.trim().is_empty()) {
        Some(json) => {
            log::debug!("[config] Using #{} from the page", CONFIG_ELEMENT_ID);
            SourceConfig::from_json(json)
        }
        None => {
            log::debug!("[config] Using build-time CARD_SLIDER_* values");
            config_from_env(env)
        }
    }
}

fn config_from_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

fn config_from_env(env: EnvValues) -> Result<SourceConfig, ConfigError> {
    let mut config = SourceConfig::new(
        env.table_id.unwrap_or_default(),
        env.view_id.unwrap_or_default(),
    );
    if let Some(base_url) = env.base_url {
        config.base_url = base_url.to_string();
    }
    config.token = env.token.map(str::to_string);
    if let Some(size) = env.page_size {
        config.page_size = size
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("page size {:?} is not a number", size)))?;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_source::DEFAULT_BASE_URL;

    #[test]
    fn test_env_config() {
        let config = config_from_env(EnvValues {
            table_id: Some("tbl"),
            view_id: Some("vw"),
            token: Some("tok"),
            page_size: Some("12"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token(), Some("tok"));
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_env_config_requires_ids() {
        let err = config_from_env(EnvValues::default()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("table ID"));
    }

    #[test]
    fn test_env_config_rejects_bad_page_size() {
        let err = config_from_env(EnvValues {
            table_id: Some("tbl"),
            view_id: Some("vw"),
            page_size: Some("lots"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    /// Text inside the config `<script>` of a host page
    fn config_script_text(html: &str) -> Option<&str> {
        let open = html.find(&format!("id=\"{}\"", CONFIG_ELEMENT_ID))?;
        let body_start = open + html[open..].find('>')? + 1;
        let body_len = html[body_start..].find("</script>")?;
        Some(&html[body_start..body_start + body_len])
    }

    #[test]
    fn test_shipped_page_is_unconfigured() {
        let text = config_script_text(include_str!("../index.html"))
            .expect("index.html should carry the config script");
        assert!(text.trim().is_empty());

        let err = resolve_config(Some(text), EnvValues::default()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("table ID"));
        assert!(err.to_string().starts_with("Card source is not configured"));
    }

    #[test]
    fn test_page_json_takes_precedence() {
        let config = resolve_config(
            Some(r#"{"tableId":"page_tbl","viewId":"page_vw"}"#),
            EnvValues {
                table_id: Some("env_tbl"),
                view_id: Some("env_vw"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.table_id, "page_tbl");
    }

    #[test]
    fn test_blank_page_json_falls_back_to_env() {
        let config = resolve_config(
            Some("  \n  "),
            EnvValues {
                table_id: Some("env_tbl"),
                view_id: Some("env_vw"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.view_id, "env_vw");
    }
}
