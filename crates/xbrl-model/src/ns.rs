//! Well-known namespace URIs.

/// XBRL 2.1 instance namespace.
pub const XBRLI: &str = "http://www.xbrl.org/2003/instance";
/// XBRL linkbase namespace.
pub const LINK: &str = "http://www.xbrl.org/2003/linkbase";
/// XBRL Dimensions instance namespace.
pub const XBRLDI: &str = "http://xbrl.org/2006/xbrldi";
/// ISO 4217 currency measure namespace.
pub const ISO4217: &str = "http://www.xbrl.org/2003/iso4217";
/// XML Schema instance namespace.
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// The `xml:` namespace.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
