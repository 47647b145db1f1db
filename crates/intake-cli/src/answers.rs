//! Answer file loading.
//!
//! An answers file is a JSON object mapping question ids to a string (single
//! value), an array of strings (multi-choice selections, in toggle order),
//! or `true`/`false` under the reserved `consent` key.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use intake_model::{CONSENT_FIELD_ID, FormState};

pub fn load_answers(path: &Path) -> Result<FormState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read answers file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse answers file {}", path.display()))?;
    let Value::Object(entries) = value else {
        bail!("answers file must be a JSON object of question id to answer");
    };

    let mut state = FormState::new();
    for (question_id, answer) in entries {
        match answer {
            Value::Bool(given) if question_id == CONSENT_FIELD_ID => state.set_consent(given),
            Value::String(single) => state.set_single(&question_id, single),
            Value::Array(options) => {
                for option in options {
                    let Value::String(option) = option else {
                        bail!("answer '{question_id}' must be an array of strings");
                    };
                    state.toggle_multi(&question_id, &option);
                }
            }
            other => bail!("unsupported answer for '{question_id}': {other}"),
        }
    }
    Ok(state)
}
