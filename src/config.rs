//! Portal configuration.
//!
//! ```toml
//! page_size = 5
//! default_status = "pending"
//! data_file = "appointments.json"
//! ```
//!
//! Every key is optional.

use crate::appointment::{self, Appointment, AppointmentStatus};
use crate::error::{Error, Result};
use crate::filter::StatusFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rows per page when nothing is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Settings for the appointment status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows shown per page; must be at least 1.
    pub page_size: usize,
    /// Status preselected in the filter; `None` shows all.
    pub default_status: Option<AppointmentStatus>,
    /// JSON file with the appointment list; `None` uses the bundled mock set.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_status: None,
            data_file: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// A relative `data_file` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(data), Some(dir)) = (&config.data_file, path.parent()) {
            if data.is_relative() {
                config.data_file = Some(dir.join(data));
            }
        }
        tracing::debug!(path = %path.display(), page_size = config.page_size, "loaded config");
        Ok(config)
    }

    /// Rejects values the components cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config {
                reason: "page_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The status filter the view starts with.
    pub fn initial_status_filter(&self) -> StatusFilter {
        self.default_status.map_or(StatusFilter::All, StatusFilter::Only)
    }

    /// Loads the configured appointment list.
    pub fn load_appointments(&self) -> Result<Vec<Appointment>> {
        match &self.data_file {
            Some(path) => appointment::load_appointments(path),
            None => appointment::mock_appointments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_status_filter(), StatusFilter::All);
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml_str(
            r#"
            page_size = 2
            default_status = "cancelled"
            data_file = "/srv/portal/appointments.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, 2);
        assert_eq!(
            config.initial_status_filter(),
            StatusFilter::Only(AppointmentStatus::Cancelled)
        );
        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/srv/portal/appointments.json"))
        );
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = Config::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml_str("pagesize = 3").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(Config::from_toml_str(r#"default_status = "lost""#).is_err());
    }

    #[test]
    fn test_default_data_is_bundled_mock() {
        let appointments = Config::default().load_appointments().unwrap();
        assert_eq!(appointments.len(), 5);
    }

    #[test]
    fn test_load_resolves_relative_data_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::write(
            dir.join("appointments.json"),
            r#"[{"id": 1, "specialty": "Nhi khoa", "date": "2025-08-01",
                 "time": "08:00", "status": "confirmed"}]"#,
        )
        .unwrap();
        std::fs::write(dir.join("portal.toml"), "data_file = \"appointments.json\"\n").unwrap();

        let config = Config::load(&dir.join("portal.toml")).unwrap();
        assert_eq!(config.data_file, Some(dir.join("appointments.json")));
        let appointments = config.load_appointments().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/no/such/portal.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
