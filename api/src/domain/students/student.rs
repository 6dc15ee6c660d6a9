pub const NAME_MAX_CHARS: usize = 200;
pub const MAJOR_MAX_CHARS: usize = 200;
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 0..=150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub major: Option<String>,
}

/// Writable student attributes, already trimmed and range-checked.
/// Construct through [`StudentFields::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub age: Option<i64>,
    pub major: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentFieldError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {} characters", NAME_MAX_CHARS)]
    NameTooLong,
    #[error("age {0} is out of range")]
    AgeOutOfRange(i64),
    #[error("major must be at most {} characters", MAJOR_MAX_CHARS)]
    MajorTooLong,
}

impl StudentFields {
    pub fn new(
        name: &str,
        age: Option<i64>,
        major: Option<&str>,
    ) -> Result<Self, StudentFieldError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudentFieldError::EmptyName);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(StudentFieldError::NameTooLong);
        }
        if let Some(a) = age {
            if !AGE_RANGE.contains(&a) {
                return Err(StudentFieldError::AgeOutOfRange(a));
            }
        }
        // blank major is treated as absent
        let major = major.map(str::trim).filter(|m| !m.is_empty());
        if major.is_some_and(|m| m.chars().count() > MAJOR_MAX_CHARS) {
            return Err(StudentFieldError::MajorTooLong);
        }
        Ok(Self {
            name: name.to_string(),
            age,
            major: major.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_major() {
        let f = StudentFields::new("  Bob ", Some(20), Some("   ")).unwrap();
        assert_eq!(f.name, "Bob");
        assert_eq!(f.age, Some(20));
        assert_eq!(f.major, None);
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            StudentFields::new(" \t", None, None),
            Err(StudentFieldError::EmptyName)
        );
    }

    #[test]
    fn rejects_age_outside_range() {
        assert_eq!(
            StudentFields::new("Bob", Some(-1), None),
            Err(StudentFieldError::AgeOutOfRange(-1))
        );
        assert!(StudentFields::new("Bob", Some(150), None).is_ok());
        assert!(StudentFields::new("Bob", Some(151), None).is_err());
    }

    #[test]
    fn rejects_long_name() {
        let name = "x".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(
            StudentFields::new(&name, None, None),
            Err(StudentFieldError::NameTooLong)
        );
    }
}
