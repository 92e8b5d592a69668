// SPDX-License-Identifier: MPL-2.0
//! Full-state dump for the "log all values" action.
//!
//! The JSON shape is one object per field keyed by locale code, plus a
//! `type` object holding the per-locale notification choice:
//!
//! ```json
//! { "title": { "en": "", "de": "", "es": "" }, "type": { "en": "all", ... } }
//! ```

use serde_json::{Map, Value};

use super::ActivityLog;
use crate::domain::form::{FormState, LocaleCode, LocaleMap};

/// Tracing target of inspection dumps.
pub const INSPECT_TARGET: &str = "locale_form::inspect";

/// Key of the choice slot in the dump.
const CHOICE_KEY: &str = "type";

/// Builds the JSON representation of `form`.
#[must_use]
pub fn form_state_json(form: &FormState) -> Value {
    let mut root = Map::new();
    for (field, values) in form.fields() {
        root.insert(
            field.key().to_string(),
            locale_map_json(values, |value| Value::String(value.clone())),
        );
    }
    root.insert(
        CHOICE_KEY.to_string(),
        locale_map_json(form.choices(), |choice| {
            Value::String(choice.key().to_string())
        }),
    );
    Value::Object(root)
}

fn locale_map_json<T>(map: &LocaleMap<T>, to_value: impl Fn(&T) -> Value) -> Value {
    let object: Map<String, Value> = map
        .iter()
        .map(|(locale, value)| (locale.code().to_string(), to_value(value)))
        .collect();
    Value::Object(object)
}

/// Emits the whole form state on the diagnostic channel and returns the
/// pretty-printed JSON that was emitted. Does not modify anything.
pub fn inspect(
    form: &FormState,
    active_locale: LocaleCode,
    activity: &ActivityLog,
) -> serde_json::Result<String> {
    let dump = serde_json::to_string_pretty(&form_state_json(form))?;
    tracing::info!(
        target: INSPECT_TARGET,
        active_locale = %active_locale,
        recorded_actions = activity.len(),
        evicted_actions = activity.evicted(),
        "form state:\n{dump}"
    );
    let actions = activity.export_json()?;
    tracing::debug!(target: INSPECT_TARGET, "recent actions:\n{actions}");
    Ok(dump)
}
