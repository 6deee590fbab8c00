use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Stateless call-to-action stubs. Each action has no side effect beyond its
/// fixed simulated confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Action {
    SignUp,
    ShareLinkedin,
    ShareTwitter,
    CopyReferral,
}

impl Action {
    pub fn confirmation(&self) -> &'static str {
        match self {
            Action::SignUp => "Thanks! A signup link has been sent to your email (simulated).",
            Action::ShareLinkedin => "LinkedIn share simulated!",
            Action::ShareTwitter => "Twitter share simulated!",
            Action::CopyReferral => "Referral link copied (simulated)!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmations_are_fixed() {
        assert_eq!(
            Action::SignUp.confirmation(),
            "Thanks! A signup link has been sent to your email (simulated)."
        );
        assert_eq!(Action::ShareLinkedin.confirmation(), "LinkedIn share simulated!");
        assert_eq!(Action::ShareTwitter.confirmation(), "Twitter share simulated!");
        assert_eq!(
            Action::CopyReferral.confirmation(),
            "Referral link copied (simulated)!"
        );
    }
}
