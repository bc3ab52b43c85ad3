/// Three-state update for a nullable task field.
///
/// `Option<T>` alone cannot distinguish "leave the deadline as it is" from
/// "remove the deadline", so partial updates carry:
/// - `NoChange`: field keeps its existing value
/// - `Set(value)`: field is updated to the provided value
/// - `Clear`: field is cleared (set to None)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field.
    ///
    /// ```
    /// use taskboard_domain::FieldUpdate;
    ///
    /// let mut image_url = Some("https://example.com/a.png".to_string());
    /// FieldUpdate::Clear.apply_to(&mut image_url);
    /// assert_eq!(image_url, None);
    ///
    /// FieldUpdate::Set("https://example.com/b.png".to_string()).apply_to(&mut image_url);
    /// assert_eq!(image_url.as_deref(), Some("https://example.com/b.png"));
    /// ```
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some(value)` becomes `Set(value)`, `None` becomes `Clear`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
