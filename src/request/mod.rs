//! Outgoing request payload for `POST /api/clip`.

pub mod effects;
pub mod schedule;

pub use effects::{parse_effects, Effect, EffectKind};
pub use schedule::{ScheduleUnit, UploadSchedule};

use bon::Builder;
use serde::Serialize;

use crate::error::{ClipError, Result};
use crate::form::{
    FormData, EFFECTS_FIELD, EMOJIS_FIELD, SCHEDULE_INTERVAL_FIELD, SCHEDULE_UNIT_FIELD,
    SUBTITLE_COLOR_FIELD, URL_FIELD,
};

/// Body of a clip request.
///
/// The four core fields are always serialized, as `null` when the form did
/// not carry them. The upload schedule is only sent when present.
///
/// ```
/// use clipform::request::ClipRequest;
///
/// let request = ClipRequest::builder()
///     .url("U")
///     .subtitle_color("C")
///     .emojis("E")
///     .effects("F")
///     .build();
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"url":"U","subtitle_color":"C","emojis":"E","effects":"F"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
pub struct ClipRequest {
    #[builder(into)]
    pub url: Option<String>,
    #[builder(into)]
    pub subtitle_color: Option<String>,
    #[builder(into)]
    pub emojis: Option<String>,
    #[builder(into)]
    pub effects: Option<String>,
    #[serde(flatten)]
    pub schedule: Option<UploadSchedule>,
}

impl ClipRequest {
    /// Read the request fields from a form snapshot.
    ///
    /// Values are copied untouched. Only the optional schedule fields are
    /// parsed, since they have to become typed values.
    pub fn from_form(form: &FormData) -> Result<Self> {
        let schedule = UploadSchedule::from_fields(
            form.get(SCHEDULE_INTERVAL_FIELD),
            form.get(SCHEDULE_UNIT_FIELD),
        )?;

        Ok(Self {
            url: form.get(URL_FIELD).map(str::to_owned),
            subtitle_color: form.get(SUBTITLE_COLOR_FIELD).map(str::to_owned),
            emojis: form.get(EMOJIS_FIELD).map(str::to_owned),
            effects: form.get(EFFECTS_FIELD).map(str::to_owned),
            schedule,
        })
    }

    /// Reject requests the backend is known to refuse or mishandle.
    pub fn validate(&self) -> Result<()> {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => {}
            _ => return Err(ClipError::validation("URL is required")),
        }

        if let Some(effects) = self.effects.as_deref() {
            parse_effects(effects)?;
        }

        Ok(())
    }

    /// Effects the backend will apply, in order.
    pub fn parsed_effects(&self) -> Result<Vec<Effect>> {
        self.effects.as_deref().map_or(Ok(Vec::new()), parse_effects)
    }
}
