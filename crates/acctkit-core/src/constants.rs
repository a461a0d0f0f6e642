/// Separator between the numeric account id and the opaque suffix.
pub const ID_SEPARATOR: char = '/';

/// Primary avatar field of an avatar record.
pub const AVATAR_URL_FIELD: &str = "avatarUrl";

/// Secondary avatar field. Accepted on input, never read by the selector.
pub const PROFILE_IMAGE_URL_FIELD: &str = "profileImageUrl";
