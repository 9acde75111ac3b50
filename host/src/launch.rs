use appkit_core::api::{ApplicationInfo, HostError, ProcessInfo};
use serde::{Deserialize, Serialize};

/// Everything the manager hands over when it asks the process to launch
/// its application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppLaunchData {
    pub application_info: ApplicationInfo,
    pub process_info: ProcessInfo,
    #[serde(default)]
    pub record_id: i32,
}

impl AppLaunchData {
    pub fn new(application_info: ApplicationInfo, process_info: ProcessInfo) -> Self {
        Self {
            application_info,
            process_info,
            record_id: 0,
        }
    }

    pub fn with_record_id(mut self, record_id: i32) -> Self {
        self.record_id = record_id;
        self
    }

    pub fn validate(&self) -> Result<(), HostError> {
        if self.application_info.name.trim().is_empty() {
            return Err(HostError::InvalidLaunchData(
                "application name is empty".to_string(),
            ));
        }
        if self.process_info.name.trim().is_empty() {
            return Err(HostError::InvalidLaunchData(
                "process name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_names() {
        let mut data = AppLaunchData::default();
        assert!(matches!(
            data.validate(),
            Err(HostError::InvalidLaunchData(_))
        ));

        data.application_info.name = "Demo".into();
        assert!(data.validate().is_err());

        data.process_info.name = "com.example.demo".into();
        assert!(data.validate().is_ok());
    }
}
