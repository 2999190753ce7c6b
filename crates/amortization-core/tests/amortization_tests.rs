use amortization_core::amortization::{compute_loan, LoanInput, MonthEndPolicy};
use amortization_core::AmortizationError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ===========================================================================
// Reference loan: 120k at 6% over 12 months from 2024-01-01
// ===========================================================================

fn reference_loan() -> LoanInput {
    LoanInput::new(dec!(120000), dec!(6), 12, date(2024, 1, 1))
}

#[test]
fn test_reference_loan_headline_figures() {
    let result = compute_loan(&reference_loan()).unwrap();

    assert_eq!(result.monthly_rate, dec!(0.005));
    // 120000 * 0.005 * 1.005^12 / (1.005^12 - 1) ≈ 10327.97
    assert!((result.monthly_payment - dec!(10327.97)).abs() < dec!(0.005));
    assert!((result.total_interest - dec!(3935.66)).abs() < dec!(0.01));
    assert!((result.total_payable - dec!(123935.66)).abs() < dec!(0.01));
}

#[test]
fn test_reference_loan_dates() {
    let result = compute_loan(&reference_loan()).unwrap();

    assert_eq!(result.schedule.len(), 12);
    assert_eq!(result.schedule[0].date, date(2024, 1, 1));
    assert_eq!(result.schedule[5].date, date(2024, 6, 1));
    assert_eq!(result.schedule[11].date, date(2024, 12, 1));

    let periods: Vec<u32> = result.schedule.iter().map(|p| p.period).collect();
    assert_eq!(periods, (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_reference_loan_last_row() {
    let result = compute_loan(&reference_loan()).unwrap();
    let last = result.schedule.last().unwrap();

    assert_eq!(last.display.principal_portion, dec!(10276.59));
    assert_eq!(last.display.interest_portion, dec!(51.38));
    assert_eq!(last.display.remaining_balance.to_string(), "0.00");
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_single_period_pays_principal_plus_one_month_interest() {
    let input = LoanInput::new(dec!(25000), dec!(12), 1, date(2024, 3, 10));
    let result = compute_loan(&input).unwrap();

    // r = 1% => payment = 25000 * 1.01
    assert_eq!(result.monthly_payment, dec!(25250));
    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.schedule[0].interest_portion, dec!(250));
    assert!(result.final_balance().abs() < dec!(0.0000001));
}

#[test]
fn test_schedule_length_matches_term() {
    for term in [1u32, 2, 7, 60, 360] {
        let input = LoanInput::new(dec!(250000), dec!(5.25), term, date(2024, 1, 15));
        let result = compute_loan(&input).unwrap();
        assert_eq!(result.schedule.len(), term as usize, "term {term}");
    }
}

#[test]
fn test_final_balance_near_zero() {
    let input = LoanInput::new(dec!(300000), dec!(6.5), 360, date(2024, 1, 1));
    let result = compute_loan(&input).unwrap();

    assert!(result.final_balance().abs() < dec!(0.01));
    assert!((result.principal_repaid() - dec!(300000)).abs() < dec!(0.01));
}

#[test]
fn test_total_payable_identity() {
    let input = LoanInput::new(dec!(18750.50), dec!(7.9), 48, date(2023, 9, 1));
    let result = compute_loan(&input).unwrap();

    assert_eq!(result.total_payable, result.total_interest + input.principal);
}

#[test]
fn test_balance_strictly_decreasing() {
    let input = LoanInput::new(dec!(200000), dec!(4), 120, date(2024, 1, 1));
    let result = compute_loan(&input).unwrap();

    let mut previous = input.principal;
    for row in &result.schedule {
        assert!(
            row.remaining_balance < previous,
            "period {} balance {} not below {}",
            row.period,
            row.remaining_balance,
            previous
        );
        previous = row.remaining_balance;
    }
}

#[test]
fn test_interest_share_falls_over_time() {
    let input = LoanInput::new(dec!(200000), dec!(4), 120, date(2024, 1, 1));
    let result = compute_loan(&input).unwrap();

    let first = &result.schedule[0];
    let last = result.schedule.last().unwrap();
    assert!(first.interest_portion > last.interest_portion);
    assert!(first.principal_portion < last.principal_portion);
}

// ===========================================================================
// Zero rate and invalid input
// ===========================================================================

#[test]
fn test_zero_rate_divides_principal_evenly() {
    let input = LoanInput::new(dec!(1200), Decimal::ZERO, 12, date(2024, 1, 1));
    let result = compute_loan(&input).unwrap();

    assert_eq!(result.monthly_payment, dec!(100));
    assert_eq!(result.total_interest, Decimal::ZERO);
    for row in &result.schedule {
        assert_eq!(row.interest_portion, Decimal::ZERO);
        assert_eq!(row.principal_portion, dec!(100));
    }
    assert_eq!(result.final_balance(), Decimal::ZERO);
}

#[test]
fn test_zero_term_rejected() {
    let mut input = reference_loan();
    input.term_months = 0;
    let err = compute_loan(&input).unwrap_err();
    assert!(matches!(err, AmortizationError::InvalidTerm(_)));
}

#[test]
fn test_non_positive_amount_rejected() {
    let mut input = reference_loan();
    input.principal = dec!(-500);
    assert!(matches!(
        compute_loan(&input),
        Err(AmortizationError::InvalidAmount(_))
    ));
}

#[test]
fn test_overflowing_term_reports_overflow() {
    // 100% a month for 1200 months: (1 + 1)^1200 exceeds Decimal
    let input = LoanInput::new(dec!(1000), dec!(1200), 1200, date(2024, 1, 1));
    assert!(matches!(
        compute_loan(&input),
        Err(AmortizationError::Overflow { .. })
    ));
}

#[test]
fn test_total_of_payments_overflow_is_an_error() {
    // The payment fits in a Decimal but twelve of them do not
    let input = LoanInput::new(
        dec!(50000000000000000000000000000),
        dec!(100),
        12,
        date(2024, 1, 1),
    );
    assert!(matches!(
        compute_loan(&input),
        Err(AmortizationError::Overflow { .. })
    ));
}

#[test]
fn test_huge_zero_rate_term_rejected() {
    let input = LoanInput::new(dec!(1000), Decimal::ZERO, 2_000_000_000, date(2024, 1, 1));
    assert!(matches!(
        compute_loan(&input),
        Err(AmortizationError::InvalidTerm(_))
    ));
}

#[test]
fn test_maximum_term_computes() {
    let input = LoanInput::new(
        dec!(1000000),
        dec!(3),
        amortization_core::amortization::input::MAX_TERM_MONTHS,
        date(2024, 1, 1),
    );
    let result = compute_loan(&input).unwrap();
    assert_eq!(result.schedule.len(), 1200);
    assert_eq!(result.schedule[1199].date, date(2123, 12, 1));
}

// ===========================================================================
// Month-end handling
// ===========================================================================

#[test]
fn test_month_end_clamp() {
    let input = LoanInput::new(dec!(3000), dec!(5), 3, date(2024, 1, 31));
    let result = compute_loan(&input).unwrap();

    let dates: Vec<NaiveDate> = result.schedule.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]);
}

#[test]
fn test_month_end_rollover() {
    let input = LoanInput::new(dec!(3000), dec!(5), 3, date(2023, 1, 31))
        .with_month_end(MonthEndPolicy::Rollover);
    let result = compute_loan(&input).unwrap();

    let dates: Vec<NaiveDate> = result.schedule.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2023, 1, 31), date(2023, 3, 3), date(2023, 3, 31)]);
}

#[test]
fn test_month_end_policy_does_not_change_amounts() {
    let clamp = LoanInput::new(dec!(3000), dec!(5), 6, date(2024, 1, 31));
    let rollover = clamp.clone().with_month_end(MonthEndPolicy::Rollover);

    let a = compute_loan(&clamp).unwrap();
    let b = compute_loan(&rollover).unwrap();
    assert_eq!(a.monthly_payment, b.monthly_payment);
    assert_eq!(a.final_balance(), b.final_balance());
}
