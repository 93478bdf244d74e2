/// Identifies one registration in a [`crate::PatternTable`]; never reused.
pub type RegistrationId = u64;
