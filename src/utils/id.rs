use crate::constants::REQUEST_ID_LENGTH;

/// Generates a short request identifier used to correlate log lines
///
/// The identifier is composed of uppercase letters and digits.
///
/// # Examples
/// ```
/// use project_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
