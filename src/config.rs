use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 3000;

/// 環境変数から読み込むサーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    /// 起動時に既定の映画と管理者を読み込むか
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_catalog: true,
        }
    }
}

impl AppConfig {
    /// `PORT`・`BIND_ADDRESS`・`SEED_CATALOG`を読む
    ///
    /// 値が不正な場合は警告を出して既定値を使う。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = parse_or_default("PORT", lookup("PORT"), defaults.port);
        let bind_address = parse_or_default(
            "BIND_ADDRESS",
            lookup("BIND_ADDRESS"),
            defaults.bind_address,
        );
        let seed_catalog = match lookup("SEED_CATALOG") {
            None => defaults.seed_catalog,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    tracing::warn!(value = %value, "Invalid SEED_CATALOG, using default");
                    defaults.seed_catalog
                }
            },
        };

        Self {
            bind_address,
            port,
            seed_catalog,
        }
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.listen_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_values() {
        let config = config(&[
            ("PORT", "8080"),
            ("BIND_ADDRESS", "127.0.0.1"),
            ("SEED_CATALOG", "false"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.listen_address(), "127.0.0.1:8080");
        assert!(!config.seed_catalog);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config(&[
            ("PORT", "not-a-port"),
            ("BIND_ADDRESS", "localhost:1"),
            ("SEED_CATALOG", "maybe"),
        ]);
        assert_eq!(config, AppConfig::default());
    }
}
