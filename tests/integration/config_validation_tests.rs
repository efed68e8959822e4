//! Configuration validation tests

#[cfg(test)]
mod tests {
    use orderpurge_rs::config::{Config, Validate};

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let mut config = Config::default();
        config.service.purge.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_type_filter_is_rejected() {
        let mut config = Config::default();
        config.service.purge.type_filter = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_stall_threshold_is_rejected() {
        let mut config = Config::default();
        config.service.purge.stall_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_audit_path_is_rejected() {
        let mut config = Config::default();
        config.service.audit.log_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_admin_key_is_rejected() {
        let mut config = Config::default();
        config.service.auth.admin_keys = vec!["too-short".to_string()];
        assert!(config.validate().is_err());
    }
}
