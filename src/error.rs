use core::fmt;

use crate::model::ServiceId;

/// Checked capacity invariants of the game services.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ServiceError {
    /// A render request arrived while the display deferral buffer was full.
    DeferralOverflow,
    /// The sequence store cannot take another symbol.
    SequenceOverflow,
    /// A service's event queue was full when something was posted to it.
    QueueOverflow(ServiceId),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeferralOverflow => f.write_str("display deferral buffer overflow"),
            Self::SequenceOverflow => f.write_str("sequence capacity exceeded"),
            Self::QueueOverflow(service) => {
                write!(f, "event queue overflow for {}", service.label())
            }
        }
    }
}

impl core::error::Error for ServiceError {}
