//! Trade construction from the standard overnight future conventions.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;

use meridian_core::daycounts::DayCountConvention;
use meridian_core::{
    BusinessDayAdjustment, BusinessDayConvention, CoreError, Currency, Date, DateSequence,
    DaysAdjustment, HolidayCalendarId, Period, ReferenceData, YearMonth,
};
use meridian_products::prelude::*;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn og1() -> SecurityId {
    SecurityId::of("OG", "1").unwrap()
}

const NOTIONAL_1M: f64 = 1_000_000.0;

fn feb_2020_trade(convention: &OvernightFutureConvention) -> OvernightFutureTrade {
    convention
        .create_trade(
            d(2020, 1, 25),
            og1(),
            YearMonth::new(2020, 2).unwrap(),
            20.0,
            NOTIONAL_1M,
            0.999,
            &ReferenceData::standard(),
        )
        .unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn of_applies_defaults() {
    let convention = OvernightFutureConvention::of(
        OvernightIndex::USD_SOFR,
        DateSequence::QuarterlyImm,
        OvernightAccrualMethod::Compounded,
    );
    assert_eq!(convention.name(), "USD-SOFR-Quarterly-IMM");
    assert_eq!(convention.index(), &OvernightIndex::USD_SOFR);
    assert_eq!(convention.accrual_method(), OvernightAccrualMethod::Compounded);
    assert_eq!(convention.date_sequence(), DateSequence::QuarterlyImm);
    assert_eq!(convention.start_date_adjustment(), &BusinessDayAdjustment::NONE);
    assert_eq!(convention.end_date_adjustment(), &DaysAdjustment::of_calendar_days(-1));
    assert_eq!(
        convention.last_trade_date_adjustment(),
        &DaysAdjustment::of_calendar_days_with(
            -1,
            BusinessDayAdjustment::of(BusinessDayConvention::Preceding, HolidayCalendarId::USGS)
        )
    );
}

#[test]
fn builder_with_explicit_defaults_equals_of() {
    let built = OvernightFutureConvention::builder()
        .index(OvernightIndex::USD_SOFR)
        .date_sequence(DateSequence::QuarterlyImm)
        .accrual_method(OvernightAccrualMethod::AveragedDaily)
        .name("USD-SOFR-Quarterly-IMM")
        .start_date_adjustment(BusinessDayAdjustment::NONE)
        .end_date_adjustment(DaysAdjustment::of_calendar_days(-1))
        .last_trade_date_adjustment(DaysAdjustment::of_calendar_days_with(
            -1,
            BusinessDayAdjustment::of(BusinessDayConvention::Preceding, HolidayCalendarId::USGS),
        ))
        .build()
        .unwrap();
    let shortcut = OvernightFutureConvention::of(
        OvernightIndex::USD_SOFR,
        DateSequence::QuarterlyImm,
        OvernightAccrualMethod::AveragedDaily,
    );
    assert_eq!(built, shortcut);
}

#[test]
fn builder_requires_index_sequence_and_method() {
    let no_index = OvernightFutureConvention::builder()
        .date_sequence(DateSequence::QuarterlyImm)
        .accrual_method(OvernightAccrualMethod::Compounded)
        .build();
    assert_eq!(no_index.unwrap_err(), ProductError::missing_field("index"));

    let no_sequence = OvernightFutureConvention::builder()
        .index(OvernightIndex::USD_SOFR)
        .accrual_method(OvernightAccrualMethod::Compounded)
        .build();
    assert_eq!(no_sequence.unwrap_err(), ProductError::missing_field("date_sequence"));

    let no_method = OvernightFutureConvention::builder()
        .index(OvernightIndex::USD_SOFR)
        .date_sequence(DateSequence::QuarterlyImm)
        .build();
    assert_eq!(no_method.unwrap_err(), ProductError::missing_field("accrual_method"));
}

#[test]
fn default_last_trade_uses_index_calendar() {
    let convention = OvernightFutureConvention::of(
        OvernightIndex::USD_FED_FUND,
        DateSequence::Monthly1st,
        OvernightAccrualMethod::AveragedDaily,
    );
    assert_eq!(
        convention.last_trade_date_adjustment().adjustment().calendar(),
        &HolidayCalendarId::USNY
    );
}

// ---------------------------------------------------------------------------
// Absolute trades
// ---------------------------------------------------------------------------

#[test]
fn gbp_sonia_quarterly_imm_trade() {
    let trade = feb_2020_trade(OvernightFutureConventions::gbp_sonia_quarterly_imm());
    let product = trade.product();
    assert_eq!(trade.currency(), Currency::GBP);
    assert_relative_eq!(trade.price(), 0.999);
    assert_relative_eq!(trade.quantity(), 20.0);
    assert_eq!(trade.info().trade_date, Some(d(2020, 1, 25)));
    assert_eq!(product.index(), &OvernightIndex::GBP_SONIA);
    assert_eq!(product.accrual_method(), OvernightAccrualMethod::Compounded);
    assert_relative_eq!(product.accrual_factor(), 0.25);
    assert_relative_eq!(product.notional(), NOTIONAL_1M);
    assert_eq!(product.start_date(), d(2020, 3, 18));
    assert_eq!(product.end_date(), d(2020, 6, 16));
    assert_eq!(product.last_trade_date(), d(2020, 6, 17));
    assert_eq!(
        product.period_year_fraction(),
        Decimal::from(90) / Decimal::from(365)
    );
}

#[test]
fn usd_sofr_quarterly_imm_trade() {
    let trade = feb_2020_trade(OvernightFutureConventions::usd_sofr_quarterly_imm());
    let product = trade.product();
    assert_eq!(trade.currency(), Currency::USD);
    assert_eq!(product.index(), &OvernightIndex::USD_SOFR);
    assert_eq!(product.accrual_method(), OvernightAccrualMethod::Compounded);
    assert_relative_eq!(product.accrual_factor(), 0.25);
    assert_eq!(product.start_date(), d(2020, 3, 18));
    assert_eq!(product.end_date(), d(2020, 6, 16));
    assert_eq!(product.last_trade_date(), d(2020, 6, 16));
}

#[test]
fn usd_sofr_monthly_trade() {
    let trade = feb_2020_trade(OvernightFutureConventions::usd_sofr_monthly_1st());
    let product = trade.product();
    assert_eq!(product.index(), &OvernightIndex::USD_SOFR);
    assert_eq!(product.accrual_method(), OvernightAccrualMethod::AveragedDaily);
    assert_relative_eq!(product.accrual_factor(), 1.0 / 12.0);
    assert_eq!(product.start_date(), d(2020, 2, 1));
    assert_eq!(product.end_date(), d(2020, 2, 29));
    assert_eq!(product.last_trade_date(), d(2020, 2, 28));
}

#[test]
fn usd_fed_fund_monthly_trade() {
    let trade = feb_2020_trade(OvernightFutureConventions::usd_fed_fund_monthly_1st());
    let product = trade.product();
    assert_eq!(product.index(), &OvernightIndex::USD_FED_FUND);
    assert_eq!(product.accrual_method(), OvernightAccrualMethod::AveragedDaily);
    assert_relative_eq!(product.accrual_factor(), 1.0 / 12.0);
    assert_eq!(product.start_date(), d(2020, 2, 1));
    assert_eq!(product.end_date(), d(2020, 2, 29));
    assert_eq!(product.last_trade_date(), d(2020, 2, 28));
}

// ---------------------------------------------------------------------------
// Relative trades
// ---------------------------------------------------------------------------

#[test]
fn usd_sofr_quarterly_second_contract_after_one_month() {
    let convention = OvernightFutureConventions::usd_sofr_quarterly_imm();
    let ref_data = ReferenceData::standard();
    let trade = convention
        .create_trade_relative(
            d(2020, 1, 25),
            og1(),
            Period::of_months(1),
            2,
            20.0,
            NOTIONAL_1M,
            0.999,
            &ref_data,
        )
        .unwrap();
    let product = trade.product();
    assert_eq!(product.start_date(), d(2020, 6, 17));
    assert_eq!(product.end_date(), d(2020, 9, 15));
    assert_eq!(product.last_trade_date(), d(2020, 9, 15));
    assert_relative_eq!(product.accrual_factor(), 0.25);

    let reference = convention
        .reference_date_relative(d(2020, 1, 25), Period::of_months(1), 2, &ref_data)
        .unwrap();
    assert_eq!(reference, product.start_date());
}

#[test]
fn usd_sofr_monthly_third_contract() {
    let trade = OvernightFutureConventions::usd_sofr_monthly_1st()
        .create_trade_relative(
            d(2020, 1, 25),
            og1(),
            Period::ZERO,
            3,
            20.0,
            NOTIONAL_1M,
            0.999,
            &ReferenceData::standard(),
        )
        .unwrap();
    let product = trade.product();
    assert_eq!(product.start_date(), d(2020, 4, 1));
    assert_eq!(product.end_date(), d(2020, 4, 30));
    assert_eq!(product.last_trade_date(), d(2020, 4, 30));
}

#[test]
fn zero_sequence_number_is_rejected() {
    let result = OvernightFutureConventions::usd_sofr_monthly_1st().create_trade_relative(
        d(2020, 1, 25),
        og1(),
        Period::ZERO,
        0,
        20.0,
        NOTIONAL_1M,
        0.999,
        &ReferenceData::standard(),
    );
    assert!(result.is_err());
}

#[test]
fn missing_calendar_is_a_lookup_error() {
    let result = OvernightFutureConventions::usd_sofr_quarterly_imm().create_trade(
        d(2020, 1, 25),
        og1(),
        YearMonth::new(2020, 2).unwrap(),
        20.0,
        NOTIONAL_1M,
        0.999,
        &ReferenceData::empty(),
    );
    assert!(matches!(
        result,
        Err(ProductError::Core(CoreError::CalendarNotFound { .. }))
    ));
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn lookup_returns_singletons() {
    for name in [
        "GBP-SONIA-Quarterly-IMM",
        "USD-SOFR-Quarterly-IMM",
        "USD-SOFR-Monthly-1st",
        "USD-FED-FUND-Monthly-1st",
    ] {
        let first = OvernightFutureConvention::lookup(name).unwrap();
        let second = OvernightFutureConvention::lookup(name).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name(), name);
        assert_eq!(first.to_string(), name);
    }
    assert!(std::ptr::eq(
        OvernightFutureConvention::lookup("USD-SOFR-Quarterly-IMM").unwrap(),
        OvernightFutureConventions::usd_sofr_quarterly_imm()
    ));
}

#[test]
fn lookup_unknown_or_blank_fails() {
    assert!(matches!(
        OvernightFutureConvention::lookup("Rubbish"),
        Err(ProductError::NotFound { .. })
    ));
    assert!(OvernightFutureConvention::lookup("").is_err());
}

#[test]
fn registry_extended_from_json() {
    let json = r#"[
        {"index": "EUR-ESTR", "date_sequence": "Quarterly-IMM", "accrual_method": "Compounded"},
        {"index": "GBP-SONIA", "date_sequence": "Monthly-IMM", "accrual_method": "Compounded",
         "name": "GBP-SONIA-1M"}
    ]"#;
    let registry = ConventionRegistry::standard().with_definitions_json(json).unwrap();
    assert_eq!(registry.len(), 6);
    assert!(registry.get("EUR-ESTR-Quarterly-IMM").is_some());
    assert!(registry.get("GBP-SONIA-1M").is_some());
    assert_eq!(ConventionRegistry::global().len(), 4);

    let duplicate = r#"[{"index": "USD-SOFR", "date_sequence": "Quarterly-IMM", "accrual_method": "Compounded"}]"#;
    assert!(ConventionRegistry::standard().with_definitions_json(duplicate).is_err());
    assert!(ConventionRegistry::standard().with_definitions_json("not json").is_err());
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[test]
fn templates_match_direct_construction() {
    let convention = OvernightFutureConventions::gbp_sonia_quarterly_imm();
    let ref_data = ReferenceData::standard();

    let absolute =
        OvernightFutureTemplate::absolute(YearMonth::new(2020, 2).unwrap(), convention.clone());
    let trade = absolute
        .create_trade(d(2020, 1, 25), og1(), 20.0, NOTIONAL_1M, 0.999, &ref_data)
        .unwrap();
    assert_eq!(trade, feb_2020_trade(convention));

    let relative =
        OvernightFutureTemplate::relative(Period::of_months(1), 1, convention.clone()).unwrap();
    let trade = relative
        .create_trade(d(2020, 1, 25), og1(), 20.0, NOTIONAL_1M, 0.999, &ref_data)
        .unwrap();
    assert_eq!(trade.product().start_date(), d(2020, 3, 18));
    assert_eq!(relative.convention(), convention);
}

#[test]
fn template_serde() {
    let template = OvernightFutureTemplate::relative(
        Period::of_months(3),
        1,
        OvernightFutureConventions::usd_sofr_quarterly_imm().clone(),
    )
    .unwrap();
    let json = serde_json::to_string(&template).unwrap();
    let back: OvernightFutureTemplate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, template);
}

#[test]
fn custom_index_convention_serde() {
    let saron = OvernightIndex::new(
        "CHF-SARON",
        Currency::CHF,
        HolidayCalendarId::NO_HOLIDAYS,
        DayCountConvention::Act360,
        0,
        0,
    )
    .unwrap();
    let convention = OvernightFutureConvention::of(
        saron.clone(),
        DateSequence::QuarterlyImm,
        OvernightAccrualMethod::Compounded,
    );
    let json = serde_json::to_string(&convention).unwrap();
    let back: OvernightFutureConvention = serde_json::from_str(&json).unwrap();
    assert_eq!(back, convention);
    assert_eq!(back.index(), &saron);

    let template = OvernightFutureTemplate::relative(Period::of_months(3), 1, convention).unwrap();
    let json = serde_json::to_string(&template).unwrap();
    assert_eq!(serde_json::from_str::<OvernightFutureTemplate>(&json).unwrap(), template);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn any_index() -> impl Strategy<Value = OvernightIndex> {
    prop::sample::select(OvernightIndex::standard().to_vec())
}

fn any_sequence() -> impl Strategy<Value = DateSequence> {
    prop::sample::select(DateSequence::ALL.to_vec())
}

proptest! {
    #[test]
    fn default_name_joins_index_and_sequence(index in any_index(), sequence in any_sequence()) {
        let convention = OvernightFutureConvention::of(
            index.clone(),
            sequence,
            OvernightAccrualMethod::Compounded,
        );
        prop_assert_eq!(convention.name(), format!("{}-{}", index.name(), sequence.name()));
    }

    #[test]
    fn trades_start_before_they_end(
        offset in 0i64..3650,
        months in 0i32..24,
        sequence_number in 1u32..6,
        name in prop::sample::select(vec![
            "GBP-SONIA-Quarterly-IMM",
            "USD-SOFR-Quarterly-IMM",
            "USD-SOFR-Monthly-1st",
            "USD-FED-FUND-Monthly-1st",
        ]),
    ) {
        let convention = OvernightFutureConvention::lookup(name).unwrap();
        let trade_date = d(2000, 1, 1).add_days(offset);
        let trade = convention
            .create_trade_relative(
                trade_date,
                og1(),
                Period::of_months(months),
                sequence_number,
                1.0,
                NOTIONAL_1M,
                0.99,
                &ReferenceData::standard(),
            )
            .unwrap();
        let product = trade.product();
        prop_assert!(product.start_date() >= trade_date);
        prop_assert!(product.start_date() < product.end_date());
        prop_assert!(product.last_trade_date() >= product.end_date().add_days(-4));
        let expected = convention.date_sequence().period().total_months() as f64 / 12.0;
        prop_assert!((product.accrual_factor() - expected).abs() < 1e-12);
    }
}
