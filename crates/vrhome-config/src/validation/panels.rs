//! Panel and sample validation.

use crate::schema::{LauncherConfig, PANEL_SLOTS};
use tracing::warn;
use url::Url;

/// Sample URLs may be absolute or relative to the navigation base.
fn parse_sample_url(raw: &str) -> Result<Url, url::ParseError> {
    match Url::parse(raw) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/")?.join(raw)
        }
        other => other,
    }
}

pub(super) fn validate_panels(errors: &mut Vec<String>, config: &LauncherConfig) {
    for (i, panel) in config.panels.iter().enumerate() {
        if panel.title.trim().is_empty() {
            errors.push(format!("panels[{i}].title must not be empty"));
        }
        if !panel.initial_rotation.is_finite() {
            errors.push(format!("panels[{i}].initial_rotation must be finite"));
        }
        if panel.samples.len() > PANEL_SLOTS {
            warn!(
                "panel '{}' has {} samples; only the first {PANEL_SLOTS} are shown",
                panel.title,
                panel.samples.len()
            );
        }
        for (j, sample) in panel.samples.iter().enumerate() {
            if sample.text.trim().is_empty() {
                errors.push(format!("panels[{i}].samples[{j}].text must not be empty"));
            }
            if sample.url.trim().is_empty() {
                errors.push(format!("panels[{i}].samples[{j}].url must not be empty"));
            } else if let Err(e) = parse_sample_url(&sample.url) {
                errors.push(format!(
                    "panels[{i}].samples[{j}].url = '{}' is invalid: {e}",
                    sample.url
                ));
            }
        }
    }

    if let Some(ref base) = config.navigation.base_url {
        if let Err(e) = Url::parse(base) {
            errors.push(format!("navigation.base_url = '{base}' is invalid: {e}"));
        }
    }
}
