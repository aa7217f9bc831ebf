//! Call request categories.
//!
//! Every request a patient can raise is one of these variants. The string
//! identifiers are what a hospital call system receives, so they are part of
//! the external contract and must stay stable.

use core::fmt;

/// Kind of request raised from the bedside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallType {
    /// General request for a nurse to come to the bedside.
    NurseAssistance,
    /// Request for drinking water.
    WaterRequest,
    /// Request for pain medication.
    PainMedication,
}

impl CallType {
    /// Every defined call type, in declaration order.
    pub const ALL: [CallType; 3] = [
        CallType::NurseAssistance,
        CallType::WaterRequest,
        CallType::PainMedication,
    ];

    /// Stable identifier sent to the hospital call system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CallType::NurseAssistance => "NURSE_ASSISTANCE",
            CallType::WaterRequest => "WATER_REQUEST",
            CallType::PainMedication => "PAIN_MEDICATION",
        }
    }

    /// Parse an identifier produced by [`CallType::as_str`].
    ///
    /// Matching is exact; identifiers are case-sensitive.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|call| call.as_str() == identifier)
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::CallType;

    #[test]
    fn identifiers_are_stable() {
        assert_eq!(CallType::NurseAssistance.as_str(), "NURSE_ASSISTANCE");
        assert_eq!(CallType::WaterRequest.as_str(), "WATER_REQUEST");
        assert_eq!(CallType::PainMedication.as_str(), "PAIN_MEDICATION");
    }

    #[test]
    fn from_identifier_inverts_as_str() {
        for call in CallType::ALL {
            assert_eq!(CallType::from_identifier(call.as_str()), Some(call));
        }
    }

    #[test]
    fn from_identifier_is_case_sensitive() {
        assert_eq!(CallType::from_identifier("nurse_assistance"), None);
        assert_eq!(CallType::from_identifier(""), None);
    }

    #[test]
    fn display_prints_identifier() {
        assert_eq!(
            std::format!("{}", CallType::PainMedication),
            "PAIN_MEDICATION"
        );
    }
}
