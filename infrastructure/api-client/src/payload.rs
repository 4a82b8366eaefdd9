use serde::Deserialize;

/// The `{ data, success, message? }` wrapper most endpoints answer with.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Product responses arrive either as the bare record or wrapped in an
/// [`Envelope`]. This is the single place where both shapes are reduced to
/// one; callers only ever see the record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Bare(T),
    Enveloped(Envelope<T>),
    Unrecognized(serde_json::Value),
}

impl<T> Payload<T> {
    /// `None` when neither shape carried a usable record.
    pub fn into_record(self) -> Option<T> {
        match self {
            Payload::Bare(record) => Some(record),
            Payload::Enveloped(envelope) => envelope.into_data(),
            Payload::Unrecognized(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        name: String,
    }

    fn parse(value: serde_json::Value) -> Option<Record> {
        serde_json::from_value::<Payload<Record>>(value)
            .unwrap()
            .into_record()
    }

    #[test]
    fn should_unwrap_bare_record() {
        let record = parse(json!({"id": "p1", "name": "Lamp"}));
        assert_eq!(record.map(|r| r.id), Some("p1".to_string()));
    }

    #[test]
    fn should_unwrap_enveloped_record() {
        let record = parse(json!({
            "data": {"id": "p2", "name": "Desk"},
            "success": true
        }));
        assert_eq!(record.map(|r| r.name), Some("Desk".to_string()));
    }

    #[test]
    fn should_yield_nothing_when_envelope_is_empty() {
        assert_eq!(parse(json!({"success": false, "data": null})), None);
    }

    #[test]
    fn should_yield_nothing_for_unrelated_shapes() {
        assert_eq!(parse(json!([1, 2, 3])), None);
        assert_eq!(parse(json!({"data": {"unexpected": true}})), None);
    }
}
