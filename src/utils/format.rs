/// Default thumbnail size requested from Google Drive
const DRIVE_THUMBNAIL_SIZE: &str = "w800";

/// Format a peso amount with thousands separators.
/// Whole amounts render without decimals; fractional amounts keep two.
/// Rounding happens in cents so a fraction near 1 carries into the peso part.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fract = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let formatted = if fract > 0 {
        format!("₱{}.{:02}", grouped, fract)
    } else {
        format!("₱{}", grouped)
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Case-insensitive substring check
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive string comparison for sorting
pub fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Split a delimited spreadsheet field into trimmed, non-empty tokens.
/// Accepts both `|` and `,` as separators since the sheets use either.
pub fn split_list(field: &str) -> Vec<String> {
    field
        .split(['|', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrite a Google Drive sharing link into a direct thumbnail URL.
///
/// Handles the two sharing formats the sheets contain:
/// `/file/d/<id>/view` and `open?id=<id>`. Non-Drive URLs and URLs that are
/// already in thumbnail form pass through unchanged.
pub fn drive_thumbnail_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    if !url.contains("drive.google.com") || url.contains("drive.google.com/thumbnail") {
        return url.to_string();
    }

    let file_id = extract_path_file_id(url).or_else(|| extract_query_file_id(url));

    match file_id {
        Some(id) => format!(
            "https://drive.google.com/thumbnail?id={}&sz={}",
            id, DRIVE_THUMBNAIL_SIZE
        ),
        // No ID extractable - pass through, it may already be direct
        None => url.to_string(),
    }
}

/// Extract the file ID from a `/file/d/<id>/view` style URL
fn extract_path_file_id(url: &str) -> Option<&str> {
    let rest = url.split("/file/d/").nth(1)?;
    let id = rest.split('/').next()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Extract the file ID from a `?id=<id>` or `&id=<id>` query parameter
fn extract_query_file_id(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("id=") {
            let id: &str = value;
            let end = id
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(id.len());
            if end > 0 {
                return Some(&id[..end]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(8500.0), "₱8,500");
        assert_eq!(format_price(12500.0), "₱12,500");
        assert_eq!(format_price(65000.0), "₱65,000");
        assert_eq!(format_price(1234567.0), "₱1,234,567");
        assert_eq!(format_price(999.0), "₱999");
        assert_eq!(format_price(0.0), "₱0");
        assert_eq!(format_price(1500.5), "₱1,500.50");
    }

    #[test]
    fn test_format_price_rounds_cents_into_whole() {
        // A fraction that rounds to 100 cents must carry, not print ".100"
        assert_eq!(format_price(8500.999), "₱8,501");
        assert_eq!(format_price(0.995), "₱1");
        assert_eq!(format_price(999.996), "₱1,000");
        assert_eq!(format_price(10.994), "₱10.99");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Boracay Beach Paradise", "boracay"));
        assert!(contains_ignore_case("Palawan", "LAWAN"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Tokyo", "osaka"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Hotel, Flights , Breakfast"),
            vec!["Hotel", "Flights", "Breakfast"]
        );
        assert_eq!(split_list("a|b|c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("a | b, c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(" , | "), Vec::<String>::new());
        assert_eq!(split_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_drive_thumbnail_url_view_link() {
        let url = "https://drive.google.com/file/d/1AbC_d-3f/view?usp=drive_link";
        assert_eq!(
            drive_thumbnail_url(url),
            "https://drive.google.com/thumbnail?id=1AbC_d-3f&sz=w800"
        );
    }

    #[test]
    fn test_drive_thumbnail_url_open_link() {
        let url = "https://drive.google.com/open?id=XyZ-123_a";
        assert_eq!(
            drive_thumbnail_url(url),
            "https://drive.google.com/thumbnail?id=XyZ-123_a&sz=w800"
        );
    }

    #[test]
    fn test_drive_thumbnail_url_passthrough() {
        let direct = "https://images.unsplash.com/photo-1559827260?w=800";
        assert_eq!(drive_thumbnail_url(direct), direct);

        let thumb = "https://drive.google.com/thumbnail?id=abc&sz=w800";
        assert_eq!(drive_thumbnail_url(thumb), thumb);

        assert_eq!(drive_thumbnail_url("   "), "");
    }
}
