use crate::utils::error::{PlaycesError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string, validate_phone};
use std::fmt;

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpState {
    Anonymous,
    ChoosingMethod,
    EmailEntry,
    PhoneEntry,
    OtpEntry {
        phone: String,
        digits: [Option<char>; OTP_LENGTH],
    },
    Verified {
        identity: String,
    },
}

impl SignUpState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::ChoosingMethod => "choosing_method",
            Self::EmailEntry => "email_entry",
            Self::PhoneEntry => "phone_entry",
            Self::OtpEntry { .. } => "otp_entry",
            Self::Verified { .. } => "verified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpEvent {
    Open,
    ChooseEmail,
    ChoosePhone,
    SubmitEmail { email: String, password: String },
    SendOtp { phone: String },
    EnterOtpDigit { index: usize, input: String },
    VerifyOtp,
    Back,
}

impl fmt::Display for SignUpEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::ChooseEmail => "choose_email",
            Self::ChoosePhone => "choose_phone",
            Self::SubmitEmail { .. } => "submit_email",
            Self::SendOtp { .. } => "send_otp",
            Self::EnterOtpDigit { .. } => "enter_otp_digit",
            Self::VerifyOtp => "verify_otp",
            Self::Back => "back",
        };
        f.write_str(name)
    }
}

/// Drives the login / sign-up screens. A rejected event leaves the state untouched.
#[derive(Debug, Clone)]
pub struct SignUpFlow {
    state: SignUpState,
}

impl Default for SignUpFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpFlow {
    pub fn new() -> Self {
        Self {
            state: SignUpState::Anonymous,
        }
    }

    pub fn state(&self) -> &SignUpState {
        &self.state
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.state, SignUpState::Verified { .. })
    }

    /// The OTP as typed so far, `None` outside of OTP entry.
    pub fn otp_code(&self) -> Option<String> {
        match &self.state {
            SignUpState::OtpEntry { digits, .. } => Some(digits.iter().flatten().collect()),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: SignUpEvent) -> Result<&SignUpState> {
        let next = self.next_state(&event)?;
        if next.name() != self.state.name() {
            tracing::debug!(from = self.state.name(), to = next.name(), %event, "Sign-up transition");
        }
        self.state = next;
        Ok(&self.state)
    }

    fn next_state(&self, event: &SignUpEvent) -> Result<SignUpState> {
        use SignUpEvent as E;
        use SignUpState as S;

        let next = match (&self.state, event) {
            (S::Anonymous, E::Open) => S::ChoosingMethod,
            (S::ChoosingMethod, E::ChooseEmail) => S::EmailEntry,
            (S::ChoosingMethod, E::ChoosePhone) => S::PhoneEntry,
            (S::ChoosingMethod, E::Back) => S::Anonymous,

            (S::EmailEntry, E::SubmitEmail { email, password }) => {
                validate_email("email", email)?;
                validate_non_empty_string("password", password)?;
                S::Verified {
                    identity: email.trim().to_string(),
                }
            }
            (S::PhoneEntry, E::SendOtp { phone }) => {
                validate_phone("phone", phone)?;
                S::OtpEntry {
                    phone: phone.trim().to_string(),
                    digits: [None; OTP_LENGTH],
                }
            }

            (S::OtpEntry { phone, digits }, E::EnterOtpDigit { index, input }) => {
                if *index >= OTP_LENGTH {
                    return Err(PlaycesError::validation(format!(
                        "OTP digit index {} out of range",
                        index
                    )));
                }
                let mut digits = *digits;
                digits[*index] = input.chars().find(|c| c.is_ascii_digit());
                S::OtpEntry {
                    phone: phone.clone(),
                    digits,
                }
            }
            (S::OtpEntry { phone, digits }, E::VerifyOtp) => {
                if digits.iter().any(Option::is_none) {
                    return Err(PlaycesError::validation("Enter all 6 OTP digits"));
                }
                S::Verified {
                    identity: phone.clone(),
                }
            }

            (S::EmailEntry | S::PhoneEntry | S::OtpEntry { .. }, E::Back) => S::ChoosingMethod,

            (state, event) => {
                return Err(PlaycesError::InvalidTransitionError {
                    state: state.name().to_string(),
                    event: event.to_string(),
                })
            }
        };
        Ok(next)
    }
}
