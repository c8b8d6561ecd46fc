use num_enum::TryFromPrimitive;
/// Error codes documented for the Clickatell REST API. They appear in the
/// top-level error envelope of a failed request and in the `error` member of
/// individual message entries. Codes on message entries are not dependable
/// (the same entry can carry a code that does not match its description), so
/// they are only ever used for diagnostics; top-level codes classify failures.

#[derive(TryFromPrimitive)]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Authentication failed
    AuthenticationFailed = 1,

    /// Unknown username or password
    UnknownCredentials = 2,

    /// Session ID expired
    SessionExpired = 3,

    /// Account frozen
    AccountFrozen = 4,

    /// Missing session ID
    MissingSessionId = 5,

    // Reserved 6
    /// IP Lockdown violation
    IpLockdownViolation = 7,

    /// Invalid or missing parameters
    InvalidParameters = 101,

    /// Invalid user data header
    InvalidUserDataHeader = 102,

    /// Unknown API message ID
    UnknownApiMessageId = 103,

    /// Unknown client message ID
    UnknownClientMessageId = 104,

    /// Invalid destination address
    InvalidDestinationAddress = 105,

    /// Invalid source address
    InvalidSourceAddress = 106,

    /// Empty message
    EmptyMessage = 107,

    /// Invalid or missing API ID
    InvalidApiId = 108,

    /// Missing message ID
    MissingMessageId = 109,

    // Reserved 110 - 112
    /// Maximum message parts exceeded
    MaxMessagePartsExceeded = 113,

    /// Cannot route message
    CannotRouteMessage = 114,

    /// Message expired
    MessageExpired = 115,

    /// Invalid Unicode data
    InvalidUnicodeData = 116,

    // Reserved 117 - 119
    /// Invalid delivery time
    InvalidDeliveryTime = 120,

    /// Destination mobile number blocked
    DestinationBlocked = 121,

    /// Destination mobile opted out
    DestinationOptedOut = 122,

    /// Invalid Sender ID
    InvalidSenderId = 123,

    // Reserved 124 - 127
    /// Number delisted
    NumberDelisted = 128,

    // Reserved 129
    /// Maximum MT limit exceeded
    MtLimitExceeded = 130,

    /// Invalid batch ID
    InvalidBatchId = 201,

    /// No batch template
    NoBatchTemplate = 202,

    /// No credit left
    NoCreditLeft = 301,

    /// Internal error
    InternalError = 901,
}

impl ApiErrorCode {
    /// Credentials or account state prevent any sending
    pub fn is_account_error(self) -> bool {
        matches!(
            self,
            ApiErrorCode::AuthenticationFailed
                | ApiErrorCode::UnknownCredentials
                | ApiErrorCode::SessionExpired
                | ApiErrorCode::AccountFrozen
                | ApiErrorCode::MissingSessionId
                | ApiErrorCode::IpLockdownViolation
                | ApiErrorCode::InvalidApiId
        )
    }

    /// Account has run out of credit
    pub fn is_credit_error(self) -> bool {
        self == ApiErrorCode::NoCreditLeft
    }

    /// Account is being throttled
    pub fn is_throttling(self) -> bool {
        self == ApiErrorCode::MtLimitExceeded
    }
}
