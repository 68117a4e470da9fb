//! Domain-level constants.
//!
//! These constants define business rules and the exact messages callers
//! are allowed to depend on.

// =============================================================================
// Validation messages
// =============================================================================

/// Register request has a blank id, name or password
pub const MSG_REGISTER_BLANK: &str = "Id, Name, Password Can't Blank";

/// Login request has a blank id or password
pub const MSG_LOGIN_BLANK: &str = "Id, Password Can't Blank";

/// Profile update request has a blank id or name
pub const MSG_UPDATE_PROFILE_BLANK: &str = "Id, Name Can't Blank";

/// Password update request has a blank id, old password or new password
pub const MSG_UPDATE_PASSWORD_BLANK: &str = "Id, Old Password, New Password Can't Blank";

// =============================================================================
// Business rule messages
// =============================================================================

/// Registration with an id that is already taken
pub const MSG_USER_ID_EXISTS: &str = "User Id Already Exist";

/// Login failure. Shared by unknown id and wrong password so that
/// account ids cannot be enumerated.
pub const MSG_WRONG_CREDENTIALS: &str = "Id or password is wrong";

/// Profile or password update for an unknown id
pub const MSG_USER_NOT_FOUND: &str = "User Not Found";

/// Password update with a wrong current password
pub const MSG_OLD_PASSWORD_WRONG: &str = "Old Password is Wrong";

// =============================================================================
// Password hashing
// =============================================================================

/// Default bcrypt cost (library default)
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;
