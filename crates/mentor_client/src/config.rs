use crate::MentorError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, MentorError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, MentorError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api = get("MENTOR_API_KEY")
            .ok_or_else(|| MentorError::Config("MENTOR_API_KEY missing".into()))?;
        let base_url =
            get("MENTOR_BASE_URL").unwrap_or_else(|| "https://api.deepseek.com".into());
        let model = get("MENTOR_MODEL").unwrap_or_else(|| "deepseek-chat".into());
        Ok(Self {
            api_key: SecretString::new(api.into()),
            base_url,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_missing_api_key() {
        let get = |k: &str| match k {
            "MENTOR_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(res.is_err());
    }

    #[test]
    fn from_env_reads_values_and_defaults() {
        let get = |k: &str| match k {
            "MENTOR_API_KEY" => Some("sekrit".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "https://api.deepseek.com");
        assert_eq!(cfg.model, "deepseek-chat");
    }

    #[test]
    fn from_env_overrides_base_url_and_model() {
        let get = |k: &str| match k {
            "MENTOR_API_KEY" => Some("sekrit".into()),
            "MENTOR_BASE_URL" => Some("http://localhost".into()),
            "MENTOR_MODEL" => Some("test-model".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "http://localhost");
        assert_eq!(cfg.model, "test-model");
    }
}
