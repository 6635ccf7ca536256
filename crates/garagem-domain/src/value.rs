//! Loosely typed form values

/// A raw form value as handed over by the UI: nothing, a number, or text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Number(f64),
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    /// True for `Null` and for empty text
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Null | FieldValue::Text(""))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldValue::from(2.5), FieldValue::Number(2.5));
        assert_eq!(FieldValue::from(2000), FieldValue::Number(2000.0));
        assert_eq!(FieldValue::from("abc"), FieldValue::Text("abc"));
        assert_eq!(FieldValue::from(None::<f64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x"));
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::Text("").is_blank());
        assert!(!FieldValue::Text(" ").is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }
}
