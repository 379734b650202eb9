//! Body content types.

use cairn_ir::{DataType, Header, ResolveError, TypeTable, resolve_type};

/// Media type a body is exchanged as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    Json,
    Html,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Html => "text/html",
        }
    }

    /// Determine the content type from a request or response's headers.
    ///
    /// A `Content-Type` header typed as the string literal `text/html`
    /// selects HTML; everything else is JSON.
    pub fn from_headers(headers: &[Header], table: &TypeTable) -> Result<Self, ResolveError> {
        for header in headers {
            if !header.name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            if let DataType::StringLiteral { value } = resolve_type(&header.ty, table)?
                && value.eq_ignore_ascii_case("text/html")
            {
                return Ok(ContentType::Html);
            }
        }
        Ok(ContentType::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str, ty: DataType) -> Header {
        Header {
            name: name.into(),
            description: None,
            ty,
            optional: false,
        }
    }

    #[test]
    fn test_html_detected() {
        let headers = [header("content-type", DataType::string_literal("text/html"))];
        assert_eq!(
            ContentType::from_headers(&headers, &TypeTable::new()),
            Ok(ContentType::Html)
        );
    }

    #[test]
    fn test_defaults_to_json() {
        let table = TypeTable::new();
        assert_eq!(ContentType::from_headers(&[], &table), Ok(ContentType::Json));
        let headers = [
            header("Content-Type", DataType::String),
            header("X-Html", DataType::string_literal("text/html")),
        ];
        assert_eq!(ContentType::from_headers(&headers, &table), Ok(ContentType::Json));
        assert_eq!(ContentType::Json.mime(), "application/json");
    }
}
