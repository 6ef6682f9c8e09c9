//! IEX REST Response Catalog
//!
//! Typed response shapes for the IEX HTTP API endpoints. Field names map
//! 1:1 to the wire JSON via serde renames; prices and percents use
//! [`Decimal`], epoch-millisecond timestamps stay `i64` (IEX uses `-1`
//! sentinels), calendar dates parse into [`NaiveDate`].
//!
//! # References
//!
//! - [IEX API docs](https://iextrading.com/developer/docs/)

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Quotes
// =============================================================================

/// Source of the price used for `latestPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationPrice {
    /// IEX real-time quote.
    #[serde(rename = "tops")]
    Tops,
    /// Consolidated (SIP) price.
    #[serde(rename = "sip")]
    Sip,
    /// Previous close (outside market hours).
    #[serde(rename = "previousClose")]
    PreviousClose,
    /// Official close.
    #[serde(rename = "close")]
    Close,
}

/// Human-readable description of where `latestPrice` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatestSource {
    /// Live IEX price.
    #[serde(rename = "IEX real time price")]
    IexRealTimePrice,
    /// Delayed consolidated price.
    #[serde(rename = "15 minute delayed price")]
    FifteenMinuteDelayedPrice,
    /// Official close price.
    #[serde(rename = "Close")]
    Close,
    /// Previous official close.
    #[serde(rename = "Previous close")]
    PreviousClose,
}

/// Full quote for one symbol (`/stock/{symbol}/quote`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Issuer name.
    pub company_name: String,
    /// Listing exchange.
    pub primary_exchange: String,
    /// Sector classification.
    pub sector: String,
    /// Source of `latest_price`.
    pub calculation_price: CalculationPrice,
    /// Official open price.
    pub open: Decimal,
    /// Official open time (epoch ms).
    pub open_time: i64,
    /// Official close price.
    pub close: Decimal,
    /// Official close time (epoch ms).
    pub close_time: i64,
    /// Latest price from the source in `latest_source`.
    pub latest_price: Decimal,
    /// Where the latest price came from.
    pub latest_source: LatestSource,
    /// Human-readable latest price time.
    pub latest_time: String,
    /// Latest price time (epoch ms).
    pub latest_update: i64,
    /// Volume behind the latest price.
    pub latest_volume: i64,
    /// Last IEX real-time price.
    pub iex_realtime_price: Decimal,
    /// Last IEX real-time trade size.
    pub iex_realtime_size: i64,
    /// Last IEX update time (epoch ms, `-1` when unknown).
    pub iex_last_updated: i64,
    /// 15-minute delayed market price.
    pub delayed_price: Decimal,
    /// Delayed price time (epoch ms).
    pub delayed_price_time: i64,
    /// Previous trading day's close.
    pub previous_close: Decimal,
    /// Change from previous close.
    pub change: Decimal,
    /// Change from previous close as a ratio.
    pub change_percent: Decimal,
    /// IEX's share of market volume.
    pub iex_market_percent: Decimal,
    /// Shares traded on IEX.
    pub iex_volume: i64,
    /// 30-day average total market volume.
    pub avg_total_volume: i64,
    /// Best bid price on IEX.
    pub iex_bid_price: Decimal,
    /// Best bid size on IEX.
    pub iex_bid_size: i64,
    /// Best ask price on IEX.
    pub iex_ask_price: Decimal,
    /// Best ask size on IEX.
    pub iex_ask_size: i64,
    /// Market capitalization.
    pub market_cap: i64,
    /// Price/earnings ratio (null when earnings are negative or missing).
    pub pe_ratio: Option<Decimal>,
    /// 52-week high.
    #[serde(rename = "week52High")]
    pub week_52_high: Decimal,
    /// 52-week low.
    #[serde(rename = "week52Low")]
    pub week_52_low: Decimal,
    /// Year-to-date change as a ratio.
    pub ytd_change: Decimal,
}

/// 15-minute delayed quote (`/stock/{symbol}/delayed-quote`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedQuoteResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Delayed market price.
    pub delayed_price: Decimal,
    /// Delayed high.
    pub high: Decimal,
    /// Delayed low.
    pub low: Decimal,
    /// Size of the delayed trade.
    pub delayed_size: i64,
    /// Time of the delayed price (epoch ms).
    pub delayed_price_time: i64,
    /// Time the delayed data was processed (epoch ms).
    pub processed_time: i64,
}

// =============================================================================
// Charts
// =============================================================================

/// Time window for `/stock/{symbol}/chart/{range}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRange {
    /// Five years of daily bars.
    FiveYears,
    /// Two years of daily bars.
    TwoYears,
    /// One year of daily bars.
    OneYear,
    /// Year to date, daily bars.
    YearToDate,
    /// Six months of daily bars.
    SixMonths,
    /// Three months of daily bars.
    ThreeMonths,
    /// One month of daily bars.
    OneMonth,
    /// One day of minute bars.
    OneDay,
    /// IEX picks the range based on market hours.
    Dynamic,
    /// Minute bars for one specific day (`YYYYMMDD`).
    Date(String),
}

impl ChartRange {
    /// The path segment for this range.
    #[must_use]
    pub fn as_path(&self) -> String {
        match self {
            Self::FiveYears => "5y".to_string(),
            Self::TwoYears => "2y".to_string(),
            Self::OneYear => "1y".to_string(),
            Self::YearToDate => "ytd".to_string(),
            Self::SixMonths => "6m".to_string(),
            Self::ThreeMonths => "3m".to_string(),
            Self::OneMonth => "1m".to_string(),
            Self::OneDay => "1d".to_string(),
            Self::Dynamic => "dynamic".to_string(),
            Self::Date(yyyymmdd) => format!("date/{yyyymmdd}"),
        }
    }
}

/// Time window for the dividends and splits endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    /// Five years.
    FiveYears,
    /// Two years.
    TwoYears,
    /// One year.
    OneYear,
    /// Year to date.
    YearToDate,
    /// Six months.
    SixMonths,
    /// Three months.
    ThreeMonths,
    /// One month.
    OneMonth,
}

impl HistoryRange {
    /// The path segment for this range.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveYears => "5y",
            Self::TwoYears => "2y",
            Self::OneYear => "1y",
            Self::YearToDate => "ytd",
            Self::SixMonths => "6m",
            Self::ThreeMonths => "3m",
            Self::OneMonth => "1m",
        }
    }
}

/// One minute bar from a one-day chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneDayChartItem {
    /// Minute of the bar (`HH:mm`).
    pub minute: String,
    /// Human-readable label for the bar.
    pub label: String,
    /// High within the minute.
    pub high: Decimal,
    /// Low within the minute.
    pub low: Decimal,
    /// Average price within the minute.
    pub average: Decimal,
    /// Shares traded within the minute.
    pub volume: i64,
    /// Notional value traded within the minute.
    pub notional: Decimal,
    /// Trades within the minute.
    pub number_of_trades: i64,
    /// Change relative to the chart's first bar, as a ratio.
    #[serde(default)]
    pub change_over_time: Option<Decimal>,
}

/// One daily bar from a multi-day chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDayChartItem {
    /// Trading day.
    pub date: NaiveDate,
    /// Human-readable label for the bar.
    pub label: String,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Split-adjusted volume.
    pub volume: i64,
    /// Raw (unadjusted) volume.
    pub unadjusted_volume: i64,
    /// Change from the previous close.
    pub change: Decimal,
    /// Change from the previous close as a percentage.
    pub change_percent: Decimal,
    /// Volume-weighted average price.
    pub vwap: Decimal,
    /// Change relative to the chart's first bar, as a ratio.
    #[serde(default)]
    pub change_over_time: Option<Decimal>,
}

/// One chart bar, minute or daily depending on the requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartPoint {
    /// Minute bar (one-day charts).
    Intraday(OneDayChartItem),
    /// Daily bar (multi-day charts).
    Daily(MultiDayChartItem),
}

// =============================================================================
// Open/Close and Previous
// =============================================================================

/// A price with the time it printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// The price.
    pub price: Decimal,
    /// When it printed (epoch ms).
    pub time: i64,
}

/// Official open and close (`/stock/{symbol}/open-close`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCloseResponse {
    /// Official opening price and time.
    pub open: PricePoint,
    /// Official closing price and time.
    pub close: PricePoint,
}

/// Previous trading day summary (`/stock/{symbol}/previous`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Previous {
    /// Ticker symbol.
    pub symbol: String,
    /// Trading day.
    pub date: NaiveDate,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Split-adjusted volume.
    pub volume: i64,
    /// Raw (unadjusted) volume.
    pub unadjusted_volume: i64,
    /// Change from the prior close.
    pub change: Decimal,
    /// Change from the prior close as a percentage.
    pub change_percent: Decimal,
    /// Volume-weighted average price.
    pub vwap: Decimal,
}

/// Previous-day summaries for the whole market, keyed by symbol
/// (`/stock/market/previous`).
pub type PreviousMarket = HashMap<String, Previous>;

// =============================================================================
// Company and Reference Data
// =============================================================================

/// Common issue type of a listed security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    /// American Depositary Receipt.
    #[serde(rename = "ad")]
    Adr,
    /// Real Estate Investment Trust.
    #[serde(rename = "re")]
    Reit,
    /// Closed-end fund.
    #[serde(rename = "ce")]
    ClosedEndFund,
    /// Secondary issue.
    #[serde(rename = "si")]
    SecondaryIssue,
    /// Limited partnership.
    #[serde(rename = "lp")]
    LimitedPartnership,
    /// Common stock.
    #[serde(rename = "cs")]
    CommonStock,
    /// Exchange-traded fund.
    #[serde(rename = "et")]
    Etf,
    /// Not available (warrants, notes, non-filing closed-end funds).
    #[serde(rename = "")]
    Unspecified,
}

/// Company profile (`/stock/{symbol}/company`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Issuer name.
    pub company_name: String,
    /// Listing exchange.
    pub exchange: String,
    /// Industry classification.
    pub industry: String,
    /// Company website.
    pub website: String,
    /// Business description.
    pub description: String,
    /// Chief executive officer.
    #[serde(rename = "CEO")]
    pub ceo: String,
    /// Common issue type.
    pub issue_type: IssueType,
    /// Sector classification.
    pub sector: String,
    /// Classification tags.
    pub tags: Vec<String>,
}

/// Related symbols (`/stock/{symbol}/relevant`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevantResponse {
    /// Whether the symbols are true peers (false when IEX fell back to
    /// most-active symbols).
    pub peers: bool,
    /// The related symbols.
    pub symbols: Vec<String>,
}

/// Company logo (`/stock/{symbol}/logo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoResponse {
    /// URL of the logo image.
    pub url: String,
}

/// One entry of the reference symbol list (`/ref-data/symbols`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    /// Ticker symbol.
    pub symbol: String,
    /// Issuer name.
    pub name: String,
    /// Date this record was generated.
    pub date: NaiveDate,
    /// Whether the symbol is enabled for trading on IEX.
    pub is_enabled: bool,
    /// Security type code.
    #[serde(rename = "type")]
    pub kind: String,
    /// IEX-internal identifier.
    pub iex_id: String,
}

// =============================================================================
// Fundamentals
// =============================================================================

/// One reported financial period.
///
/// Every value is optional: IEX omits line items the issuer did not
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    /// Period report date.
    pub report_date: Option<NaiveDate>,
    /// Gross profit.
    pub gross_profit: Option<i64>,
    /// Cost of revenue.
    pub cost_of_revenue: Option<i64>,
    /// Operating revenue.
    pub operating_revenue: Option<i64>,
    /// Total revenue.
    pub total_revenue: Option<i64>,
    /// Operating income.
    pub operating_income: Option<i64>,
    /// Net income.
    pub net_income: Option<i64>,
    /// Research and development expense.
    pub research_and_development: Option<i64>,
    /// Operating expense.
    pub operating_expense: Option<i64>,
    /// Current assets.
    pub current_assets: Option<i64>,
    /// Total assets.
    pub total_assets: Option<i64>,
    /// Total liabilities.
    pub total_liabilities: Option<i64>,
    /// Current cash.
    pub current_cash: Option<i64>,
    /// Current debt.
    pub current_debt: Option<i64>,
    /// Total cash.
    pub total_cash: Option<i64>,
    /// Total debt.
    pub total_debt: Option<i64>,
    /// Shareholder equity.
    pub shareholder_equity: Option<i64>,
    /// Change in cash.
    pub cash_change: Option<i64>,
    /// Cash flow.
    pub cash_flow: Option<i64>,
    /// Operating gains and losses.
    pub operating_gains_losses: Option<i64>,
}

/// Reported financials (`/stock/{symbol}/financials`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialsResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Most recent reported periods, newest first.
    pub financials: Vec<Financial>,
}

/// One reported earnings period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earning {
    /// Actual earnings per share.
    #[serde(rename = "actualEPS")]
    pub actual_eps: Decimal,
    /// Consensus estimate at report time.
    #[serde(rename = "consensusEPS")]
    pub consensus_eps: Decimal,
    /// Estimated earnings per share.
    #[serde(rename = "estimatedEPS")]
    pub estimated_eps: Decimal,
    /// When the report was announced (e.g. "BTO", "AMC").
    pub announce_time: String,
    /// Number of analyst estimates.
    pub number_of_estimates: i64,
    /// Dollar surprise vs consensus.
    #[serde(rename = "EPSSurpriseDollar")]
    pub eps_surprise_dollar: Decimal,
    /// Report date.
    #[serde(rename = "EPSReportDate")]
    pub eps_report_date: NaiveDate,
    /// Fiscal period label (e.g. "Q1 2018").
    pub fiscal_period: String,
    /// Fiscal period end date.
    pub fiscal_end_date: NaiveDate,
}

/// Earnings history (`/stock/{symbol}/earnings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Most recent quarters, newest first.
    pub earnings: Vec<Earning>,
}

/// Dividend income classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividendType {
    /// Ordinary dividend income.
    #[serde(rename = "Dividend income")]
    DividendIncome,
    /// Interest income.
    #[serde(rename = "Interest income")]
    InterestIncome,
    /// Stock dividend.
    #[serde(rename = "Stock dividend")]
    StockDividend,
    /// Short-term capital gain.
    #[serde(rename = "Short term capital gain")]
    ShortTermCapitalGain,
    /// Medium-term capital gain.
    #[serde(rename = "Medium term capital gain")]
    MediumTermCapitalGain,
    /// Long-term capital gain.
    #[serde(rename = "Long term capital gain")]
    LongTermCapitalGain,
    /// Capital gain of unspecified term.
    #[serde(rename = "Unspecified term capital gain")]
    UnspecifiedTermCapitalGain,
}

/// One dividend record (`/stock/{symbol}/dividends/{range}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    /// Ex-dividend date.
    pub ex_date: NaiveDate,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Record date.
    pub record_date: NaiveDate,
    /// Declaration date.
    pub declared_date: NaiveDate,
    /// Payment amount per share.
    pub amount: Decimal,
    /// Dividend flag code.
    pub flag: String,
    /// Income classification.
    #[serde(rename = "type")]
    pub dividend_type: DividendType,
    /// Tax qualification ("P", "Q", "N", empty, or null).
    #[serde(default)]
    pub qualified: Option<String>,
    /// Indicated annualized rate, when reported.
    #[serde(default)]
    pub indicated: Option<String>,
}

/// One split record (`/stock/{symbol}/splits/{range}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    /// Ex-split date.
    pub ex_date: NaiveDate,
    /// Declaration date.
    pub declared_date: NaiveDate,
    /// Record date.
    pub record_date: NaiveDate,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// `to_factor / for_factor` as a ratio.
    pub ratio: Decimal,
    /// Shares after the split.
    pub to_factor: Decimal,
    /// Shares before the split.
    pub for_factor: Decimal,
}

/// Key statistics (`/stock/{symbol}/stats`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatsResponse {
    /// Issuer name.
    pub company_name: String,
    /// Market capitalization.
    pub marketcap: i64,
    /// Beta vs the market.
    pub beta: Decimal,
    /// 52-week high.
    #[serde(rename = "week52high")]
    pub week_52_high: Decimal,
    /// 52-week low.
    #[serde(rename = "week52low")]
    pub week_52_low: Decimal,
    /// 52-week change as a ratio.
    #[serde(rename = "week52change")]
    pub week_52_change: Decimal,
    /// Shares held short.
    pub short_interest: i64,
    /// Date of the short interest figure.
    pub short_date: String,
    /// Annualized dividend rate.
    pub dividend_rate: Decimal,
    /// Dividend yield.
    pub dividend_yield: Decimal,
    /// Next ex-dividend date, when known.
    pub ex_dividend_date: String,
    /// Latest reported earnings per share.
    #[serde(rename = "latestEPS")]
    pub latest_eps: Decimal,
    /// Date of the latest EPS report.
    #[serde(rename = "latestEPSDate")]
    pub latest_eps_date: String,
    /// Shares outstanding.
    pub shares_outstanding: i64,
    /// Public float.
    pub float: i64,
    /// Return on equity.
    #[serde(rename = "returnOnEquity")]
    pub return_on_equity: Decimal,
    /// Consensus EPS estimate.
    #[serde(rename = "consensusEPS")]
    pub consensus_eps: Decimal,
    /// Number of analyst estimates.
    pub number_of_estimates: i64,
    /// Ticker symbol.
    pub symbol: String,
    /// Earnings before interest, taxes, depreciation and amortization.
    #[serde(rename = "EBITDA")]
    pub ebitda: i64,
    /// Trailing twelve-month revenue.
    pub revenue: i64,
    /// Trailing twelve-month gross profit.
    pub gross_profit: i64,
    /// Total cash.
    pub cash: i64,
    /// Total debt.
    pub debt: i64,
    /// Trailing twelve-month earnings per share.
    #[serde(rename = "ttmEPS")]
    pub ttm_eps: Decimal,
    /// Revenue per share.
    pub revenue_per_share: Decimal,
    /// Revenue per employee.
    pub revenue_per_employee: Decimal,
    /// Highest P/E ratio over the period.
    pub pe_ratio_high: Decimal,
    /// Lowest P/E ratio over the period.
    pub pe_ratio_low: Decimal,
    /// Dollar surprise of the latest EPS vs consensus.
    #[serde(rename = "EPSSurpriseDollar")]
    pub eps_surprise_dollar: Decimal,
    /// Percent surprise of the latest EPS vs consensus.
    #[serde(rename = "EPSSurprisePercent")]
    pub eps_surprise_percent: Decimal,
    /// Return on assets.
    pub return_on_assets: Decimal,
    /// Return on capital.
    pub return_on_capital: Decimal,
    /// Profit margin.
    pub profit_margin: Decimal,
    /// Price-to-sales ratio.
    pub price_to_sales: Decimal,
    /// Price-to-book ratio.
    pub price_to_book: Decimal,
    /// 200-day moving average.
    pub day_200_moving_avg: Decimal,
    /// 50-day moving average.
    pub day_50_moving_avg: Decimal,
    /// Institutional ownership ratio.
    pub institution_percent: Decimal,
    /// Insider ownership ratio.
    pub insider_percent: Decimal,
    /// Short ratio.
    pub short_ratio: Decimal,
    /// Five-year change ratio.
    #[serde(rename = "year5ChangePercent")]
    pub year_5_change_percent: Decimal,
    /// Two-year change ratio.
    #[serde(rename = "year2ChangePercent")]
    pub year_2_change_percent: Decimal,
    /// One-year change ratio.
    #[serde(rename = "year1ChangePercent")]
    pub year_1_change_percent: Decimal,
    /// Year-to-date change ratio.
    pub ytd_change_percent: Decimal,
    /// Six-month change ratio.
    #[serde(rename = "month6ChangePercent")]
    pub month_6_change_percent: Decimal,
    /// Three-month change ratio.
    #[serde(rename = "month3ChangePercent")]
    pub month_3_change_percent: Decimal,
    /// One-month change ratio.
    #[serde(rename = "month1ChangePercent")]
    pub month_1_change_percent: Decimal,
    /// Five-day change ratio.
    #[serde(rename = "day5ChangePercent")]
    pub day_5_change_percent: Decimal,
}

// =============================================================================
// News and Market Activity
// =============================================================================

/// One news article (`/stock/{symbol}/news/last/{n}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    /// Article timestamp (ISO-8601 as sent by the provider).
    pub datetime: String,
    /// Headline.
    pub headline: String,
    /// Publishing outlet.
    pub source: String,
    /// Link to the article.
    pub url: String,
    /// Article summary.
    pub summary: String,
    /// Related symbols, comma-separated.
    pub related: String,
}

/// Named market list for `/stock/market/list/{list}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketList {
    /// Most active by volume.
    MostActive,
    /// Largest gainers.
    Gainers,
    /// Largest losers.
    Losers,
    /// Highest IEX volume.
    IexVolume,
    /// Highest IEX market share.
    IexPercent,
}

impl MarketList {
    /// The path segment for this list.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MostActive => "mostactive",
            Self::Gainers => "gainers",
            Self::Losers => "losers",
            Self::IexVolume => "iexvolume",
            Self::IexPercent => "iexpercent",
        }
    }
}

/// Execution quality at one venue (`/stock/{symbol}/effective-spread`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSpread {
    /// Shares executed at the venue.
    pub volume: i64,
    /// Venue code.
    pub venue: String,
    /// Venue name.
    pub venue_name: String,
    /// Effective spread.
    pub effective_spread: Decimal,
    /// Effective-to-quoted spread ratio.
    pub effective_quoted: Decimal,
    /// Price improvement.
    pub price_improvement: Decimal,
}

/// Volume share at one venue (`/stock/{symbol}/volume-by-venue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeByVenue {
    /// Shares traded at the venue.
    pub volume: i64,
    /// Venue code.
    pub venue: String,
    /// Venue name.
    pub venue_name: String,
    /// Trading day, null for real-time figures.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Venue's share of market volume.
    pub market_percent: Decimal,
    /// Average share of market volume.
    pub avg_market_percent: Decimal,
}

// =============================================================================
// Tests
// =============================================================================
