//! Configuração do servidor: argumentos de linha de comando com fallback
//! para variáveis de ambiente `INFOEXT_*`.

use std::time::Duration;

use clap::Parser;
use infoext_core::nel::DEFAULT_LABEL_FIELD;

#[derive(Debug, Clone, Parser)]
#[command(name = "infoext-web")]
#[command(about = "Serviço HTTP de extração de informação")]
#[command(version)]
pub struct Config {
    /// Endereço de escuta
    #[arg(long, env = "INFOEXT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Porta de escuta
    #[arg(long, env = "INFOEXT_PORT", default_value_t = 7000)]
    pub port: u16,

    /// Modelos carregados antes de aceitar conexões
    #[arg(long, env = "INFOEXT_PRELOAD", value_delimiter = ',', default_value = "en,de")]
    pub preload: Vec<String>,

    /// Endpoint de busca da base de conhecimento; habilita a ligação de triplas
    #[arg(long, env = "INFOEXT_KB_URL")]
    pub kb_url: Option<String>,

    /// Campo de rótulos consultado no índice
    #[arg(long, env = "INFOEXT_KB_FIELD", default_value = DEFAULT_LABEL_FIELD)]
    pub kb_field: String,

    /// Tempo limite de cada consulta à base, em milissegundos
    #[arg(long, env = "INFOEXT_KB_TIMEOUT_MS", default_value_t = 5000)]
    pub kb_timeout_ms: u64,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn kb_timeout(&self) -> Duration {
        Duration::from_millis(self.kb_timeout_ms)
    }

    /// Modelos a pré-carregar, sem entradas vazias.
    pub fn preload_models(&self) -> impl Iterator<Item = &str> {
        self.preload.iter().map(|m| m.trim()).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from([
            "infoext-web",
            "--port",
            "8080",
            "--preload",
            "pt, en,",
            "--kb-url",
            "http://kb:9200/labels/_search",
        ]);
        assert_eq!(config.bind_addr(), format!("{}:8080", config.host));
        assert_eq!(config.preload_models().collect::<Vec<_>>(), vec!["pt", "en"]);
        assert_eq!(config.kb_url.as_deref(), Some("http://kb:9200/labels/_search"));
        assert_eq!(config.kb_timeout(), Duration::from_millis(config.kb_timeout_ms));
    }
}
