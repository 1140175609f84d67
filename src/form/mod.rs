//! Form snapshot and submit event.
//!
//! [`FormData`] mirrors what a browser hands over on submit: an ordered list of
//! `name=value` entries. Lookups return the first entry with a given name.

/// Field carrying the video URL.
pub const URL_FIELD: &str = "youtube-url";
/// Field carrying the subtitle color.
pub const SUBTITLE_COLOR_FIELD: &str = "subtitle-color";
/// Field carrying the emoji prefix.
pub const EMOJIS_FIELD: &str = "emojis";
/// Field carrying the effect list (`speed:1.5,fadein:0.5`).
pub const EFFECTS_FIELD: &str = "effects";
/// Optional upload schedule interval.
pub const SCHEDULE_INTERVAL_FIELD: &str = "schedule-interval";
/// Optional upload schedule unit (`hours` or `minutes`).
pub const SCHEDULE_UNIT_FIELD: &str = "schedule-unit";

/// Every field the handler reads.
pub const FIELDS: [&str; 6] = [
    URL_FIELD,
    SUBTITLE_COLOR_FIELD,
    EMOJIS_FIELD,
    EFFECTS_FIELD,
    SCHEDULE_INTERVAL_FIELD,
    SCHEDULE_UNIT_FIELD,
];

/// Snapshot of a form's current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping earlier entries with the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder-style [`append`](Self::append).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// A form submission as seen by the handler.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    form: FormData,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: FormData) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Block the native submit navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
