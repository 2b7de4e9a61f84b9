//! The fixed catalog of recognized fundamental indicators.
//!
//! One variant per field of the provider's company-overview document, as
//! listed in the official API documentation. The catalog is closed: it is
//! the first validation gate for any fundamental-data request, and there is
//! no way to extend it at runtime.

use std::fmt;
use std::str::FromStr;

use crate::core::AvError;

/// A recognized financial metric from the company-overview document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    AssetType,
    Description,
    Cik,
    Exchange,
    Currency,
    Country,
    Sector,
    Industry,
    Address,
    FiscalYearEnd,
    LatestQuarter,
    MarketCapitalization,
    Ebitda,
    PeRatio,
    PegRatio,
    BookValue,
    DividendPerShare,
    DividendYield,
    Eps,
    RevenuePerShareTtm,
    ProfitMargin,
    OperatingMarginTtm,
    ReturnOnAssetsTtm,
    ReturnOnEquityTtm,
    RevenueTtm,
    GrossProfitTtm,
    DilutedEpsTtm,
    QuarterlyEarningsGrowthYoy,
    QuarterlyRevenueGrowthYoy,
    AnalystTargetPrice,
    AnalystRatingStrongBuy,
    AnalystRatingBuy,
    AnalystRatingHold,
    AnalystRatingSell,
    AnalystRatingStrongSell,
    TrailingPe,
    ForwardPe,
    PriceToSalesRatioTtm,
    PriceToBookRatio,
    EvToRevenue,
    EvToEbitda,
    Beta,
    FiftyTwoWeekHigh,
    FiftyTwoWeekLow,
    FiftyDayMovingAverage,
    TwoHundredDayMovingAverage,
    SharesOutstanding,
    DividendDate,
    ExDividendDate,
}

impl IndicatorType {
    /// Every recognized indicator, in the provider's documentation order.
    pub const ALL: [IndicatorType; 49] = [
        Self::AssetType,
        Self::Description,
        Self::Cik,
        Self::Exchange,
        Self::Currency,
        Self::Country,
        Self::Sector,
        Self::Industry,
        Self::Address,
        Self::FiscalYearEnd,
        Self::LatestQuarter,
        Self::MarketCapitalization,
        Self::Ebitda,
        Self::PeRatio,
        Self::PegRatio,
        Self::BookValue,
        Self::DividendPerShare,
        Self::DividendYield,
        Self::Eps,
        Self::RevenuePerShareTtm,
        Self::ProfitMargin,
        Self::OperatingMarginTtm,
        Self::ReturnOnAssetsTtm,
        Self::ReturnOnEquityTtm,
        Self::RevenueTtm,
        Self::GrossProfitTtm,
        Self::DilutedEpsTtm,
        Self::QuarterlyEarningsGrowthYoy,
        Self::QuarterlyRevenueGrowthYoy,
        Self::AnalystTargetPrice,
        Self::AnalystRatingStrongBuy,
        Self::AnalystRatingBuy,
        Self::AnalystRatingHold,
        Self::AnalystRatingSell,
        Self::AnalystRatingStrongSell,
        Self::TrailingPe,
        Self::ForwardPe,
        Self::PriceToSalesRatioTtm,
        Self::PriceToBookRatio,
        Self::EvToRevenue,
        Self::EvToEbitda,
        Self::Beta,
        Self::FiftyTwoWeekHigh,
        Self::FiftyTwoWeekLow,
        Self::FiftyDayMovingAverage,
        Self::TwoHundredDayMovingAverage,
        Self::SharesOutstanding,
        Self::DividendDate,
        Self::ExDividendDate,
    ];

    /// The field name exactly as it appears in the overview document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssetType => "AssetType",
            Self::Description => "Description",
            Self::Cik => "CIK",
            Self::Exchange => "Exchange",
            Self::Currency => "Currency",
            Self::Country => "Country",
            Self::Sector => "Sector",
            Self::Industry => "Industry",
            Self::Address => "Address",
            Self::FiscalYearEnd => "FiscalYearEnd",
            Self::LatestQuarter => "LatestQuarter",
            Self::MarketCapitalization => "MarketCapitalization",
            Self::Ebitda => "EBITDA",
            Self::PeRatio => "PERatio",
            Self::PegRatio => "PEGRatio",
            Self::BookValue => "BookValue",
            Self::DividendPerShare => "DividendPerShare",
            Self::DividendYield => "DividendYield",
            Self::Eps => "EPS",
            Self::RevenuePerShareTtm => "RevenuePerShareTTM",
            Self::ProfitMargin => "ProfitMargin",
            Self::OperatingMarginTtm => "OperatingMarginTTM",
            Self::ReturnOnAssetsTtm => "ReturnOnAssetsTTM",
            Self::ReturnOnEquityTtm => "ReturnOnEquityTTM",
            Self::RevenueTtm => "RevenueTTM",
            Self::GrossProfitTtm => "GrossProfitTTM",
            Self::DilutedEpsTtm => "DilutedEPSTTM",
            Self::QuarterlyEarningsGrowthYoy => "QuarterlyEarningsGrowthYOY",
            Self::QuarterlyRevenueGrowthYoy => "QuarterlyRevenueGrowthYOY",
            Self::AnalystTargetPrice => "AnalystTargetPrice",
            Self::AnalystRatingStrongBuy => "AnalystRatingStrongBuy",
            Self::AnalystRatingBuy => "AnalystRatingBuy",
            Self::AnalystRatingHold => "AnalystRatingHold",
            Self::AnalystRatingSell => "AnalystRatingSell",
            Self::AnalystRatingStrongSell => "AnalystRatingStrongSell",
            Self::TrailingPe => "TrailingPE",
            Self::ForwardPe => "ForwardPE",
            Self::PriceToSalesRatioTtm => "PriceToSalesRatioTTM",
            Self::PriceToBookRatio => "PriceToBookRatio",
            Self::EvToRevenue => "EVToRevenue",
            Self::EvToEbitda => "EVToEBITDA",
            Self::Beta => "Beta",
            Self::FiftyTwoWeekHigh => "52WeekHigh",
            Self::FiftyTwoWeekLow => "52WeekLow",
            Self::FiftyDayMovingAverage => "50DayMovingAverage",
            Self::TwoHundredDayMovingAverage => "200DayMovingAverage",
            Self::SharesOutstanding => "SharesOutstanding",
            Self::DividendDate => "DividendDate",
            Self::ExDividendDate => "ExDividendDate",
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorType {
    type Err = AvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AvError::UnknownIndicator(s.to_string()))
    }
}

/// Whether `name` is part of the recognized catalog.
pub fn is_recognized(name: &str) -> bool {
    name.parse::<IndicatorType>().is_ok()
}
