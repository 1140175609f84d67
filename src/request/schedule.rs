//! Optional recurring upload of the generated clip.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{ClipError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleUnit {
    Hours,
    Minutes,
}

/// Upload every `interval` `unit`s once the clip exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSchedule {
    #[serde(rename = "schedule_interval")]
    pub interval: u32,
    #[serde(rename = "schedule_unit")]
    pub unit: ScheduleUnit,
}

impl UploadSchedule {
    pub fn new(interval: u32, unit: ScheduleUnit) -> Self {
        Self { interval, unit }
    }

    /// Build a schedule from raw form values. Blank values count as absent.
    pub(crate) fn from_fields(interval: Option<&str>, unit: Option<&str>) -> Result<Option<Self>> {
        let interval = interval.map(str::trim).filter(|v| !v.is_empty());
        let unit = unit.map(str::trim).filter(|v| !v.is_empty());

        let (interval, unit) = match (interval, unit) {
            (None, None) => return Ok(None),
            (Some(interval), Some(unit)) => (interval, unit),
            _ => {
                return Err(ClipError::validation(
                    "Upload schedule needs both an interval and a unit",
                ))
            }
        };

        let interval = interval
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ClipError::validation(format!(
                    "Schedule interval '{interval}' must be a positive whole number"
                ))
            })?;
        let unit = unit.parse::<ScheduleUnit>().map_err(|_| {
            ClipError::validation(format!(
                "Unsupported schedule unit '{unit}' (expected hours or minutes)"
            ))
        })?;

        Ok(Some(Self { interval, unit }))
    }
}
