/// Alphabet request identifiers are drawn from
const REQUEST_ID_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Generates a random identifier for an idempotent upload
///
/// The identifier is 32 lowercase hexadecimal characters produced by the
/// `nanoid` crate, which draws from a cryptographically secure source.
///
/// # Examples
/// ```
/// use veem_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 32);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(32, &REQUEST_ID_ALPHABET)
}
