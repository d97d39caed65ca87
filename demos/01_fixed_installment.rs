/// fix the installment and solve for how long repayment takes
use emi_solver_rs::{solve, AmortizationMethod, LoanInputs, Money, Rate, SolveError};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let principal = Money::from_major(1_000_000);
    let rate = Rate::from_percentage(dec!(10));

    // paying 25,000 a month clears the loan in just over four years
    let inputs = LoanInputs::solve_tenure(
        principal,
        rate,
        Money::from_major(25_000),
        AmortizationMethod::Reducing,
    );
    let result = solve(&inputs)?;
    println!(
        "25,000/month -> {} months, total interest {}",
        result.tenure_months,
        result.total_interest.round_dp(2)
    );

    // below the interest-only floor the loan never amortizes
    let too_low = LoanInputs::solve_tenure(
        principal,
        rate,
        Money::from_major(8_000),
        AmortizationMethod::Reducing,
    );
    match solve(&too_low) {
        Err(SolveError::InstallmentTooLow { minimum, provided }) => {
            println!(
                "{}/month is below the interest-only floor {}; tenure is infinite",
                provided,
                minimum.round_dp(2)
            );
        }
        other => println!("unexpected outcome: {:?}", other),
    }

    Ok(())
}
