//! IEX Attribution
//!
//! IEX's terms require attribution from applications that display its
//! data. These constants carry the citation text and links from the
//! published API documentation so callers can render them verbatim.

/// Citation to display alongside any IEX-sourced data.
pub const CITATION: &str = "Data provided for free by IEX.";

/// Developer portal link to cite with the data.
pub const LINK: &str = "https://iextrading.com/developer";

/// Terms-of-service exhibit governing API usage.
pub const TERMS_OF_SERVICE_LINK: &str = "https://iextrading.com/api-exhibit-a";

/// Citation required specifically for TOPS price data.
pub const TOPS_PRICE_DATA_CITATION: &str = "IEX Real-Time Price";
