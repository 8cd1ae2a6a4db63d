use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    #[serde(default = "default_page_title")]
    pub title: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_page_title(),
        }
    }
}

fn default_page_title() -> String {
    "Dashboard de Vendas da Lanchonete".to_string()
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_defaults() {
        let parsed: ServerConfig = serde_json::from_value(serde_json::json!({
            "server": { "listen": "0.0.0.0:8080" },
            "dataset": { "path": "data/dados_lanchonete.json" },
        }))
        .unwrap();
        assert_eq!(parsed.page.title, "Dashboard de Vendas da Lanchonete");
    }
}
