/// Splits a comma-separated address string into a list, trimming each piece
/// and dropping empty ones. Both forms build their request list with this.
pub fn split_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
