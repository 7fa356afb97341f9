//! Small markup helpers shared by the renderer.

use std::borrow::Cow;

/// Escapes text for use in HTML content and attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut out = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	Cow::Owned(out)
}

/// Builds the link target for a page tab. The first page keeps the bare
/// base URL as the implicit default; every other page carries the `tab`
/// query parameter set to its slug.
pub fn tab_url(base: &str, slug: &str, first: bool) -> String {
	if first {
		if base.is_empty() { "?".to_string() } else { base.to_string() }
	} else {
		let query = serde_urlencoded::to_string([("tab", slug)])
			.unwrap_or_else(|_| format!("tab={}", slug));
		format!("{}?{}", base, query)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_passthrough() {
		assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
	}

	#[test]
	fn test_escape_special_chars() {
		assert_eq!(
			escape(r#"<a href="x">Tom & Jerry's</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
		);
	}

	#[test]
	fn test_tab_url() {
		assert_eq!(tab_url("", "general", true), "?");
		assert_eq!(tab_url("admin.php", "general", true), "admin.php");
		assert_eq!(tab_url("admin.php", "advanced", false), "admin.php?tab=advanced");
	}

	#[test]
	fn test_tab_url_encodes_slug() {
		assert_eq!(tab_url("", "two words", false), "?tab=two+words");
	}
}

// vim: ts=4
