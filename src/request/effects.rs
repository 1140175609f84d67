//! Effect list grammar: `name:value[,name:value...]`.
//!
//! The backend applies `speed`, `fadein` and `fadeout` and skips anything it
//! does not recognize, so only recognized entries are checked here.

use strum::{Display, EnumString};

use crate::error::{ClipError, Result};

/// Effects the clip API knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EffectKind {
    /// Playback speed factor.
    Speed,
    /// Fade-in duration in seconds.
    FadeIn,
    /// Fade-out duration in seconds.
    FadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub value: f64,
}

/// Parse an effect list.
///
/// Entries without a `:` or with an unknown name are skipped. A recognized
/// entry must carry a finite, positive number.
pub fn parse_effects(spec: &str) -> Result<Vec<Effect>> {
    let mut effects = Vec::new();

    for entry in spec.split(',').map(str::trim) {
        let Some((name, value)) = entry.split_once(':') else {
            continue;
        };
        let Ok(kind) = name.trim().parse::<EffectKind>() else {
            tracing::debug!(effect = entry, "ignoring unknown effect");
            continue;
        };

        let value: f64 = value.trim().parse().map_err(|_| {
            ClipError::validation(format!("Effect '{entry}' needs a numeric value"))
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ClipError::validation(format!(
                "Effect '{entry}' needs a positive value"
            )));
        }

        effects.push(Effect { kind, value });
    }

    Ok(effects)
}
