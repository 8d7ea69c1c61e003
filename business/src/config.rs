use insider_states::{SnapshotClone, State, state_assign_impl};
use std::any::Any;
use ustr::Ustr;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                "".to_string()
            } else if cfg!(feature = "env_test") {
                "https://insider-test.admissioninsider.com".to_string()
            } else {
                "https://insider.admissioninsider.com".to_string()
            },
        }
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_base_url, "");
            assert_eq!(config.api_url(), Ustr::from("/api"));
        } else if cfg!(feature = "env_test") {
            assert_eq!(
                config.api_base_url,
                "https://insider-test.admissioninsider.com"
            );
            assert_eq!(
                config.api_url(),
                Ustr::from("https://insider-test.admissioninsider.com/api")
            );
        } else {
            // Default production
            assert_eq!(config.api_base_url, "https://insider.admissioninsider.com");
            assert_eq!(
                config.api_url(),
                Ustr::from("https://insider.admissioninsider.com/api")
            );
        }
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = BusinessConfig::new("http://127.0.0.1:8080".to_string());
        assert_eq!(
            config.api_url(),
            Ustr::from("http://127.0.0.1:8080/api")
        );
    }
}
