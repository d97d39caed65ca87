/// back out the interest rate implied by a quoted installment
use emi_solver_rs::{solve, AmortizationMethod, LoanInputs, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a dealer quotes 25,000/month for 60 months on a 10 lakh loan;
    // what rate is actually being charged?
    let inputs = LoanInputs::solve_rate(
        Money::from_major(1_000_000),
        60,
        Money::from_major(25_000),
        AmortizationMethod::Reducing,
    );

    let result = solve(&inputs)?;
    println!(
        "implied rate: {}% per annum",
        result.annual_rate.as_percentage().round_dp(2)
    );
    println!("total interest: {}", result.total_interest.round_dp(2));

    // the same quote read as a flat-rate loan looks much cheaper
    let flat = LoanInputs::solve_rate(
        Money::from_major(1_000_000),
        60,
        Money::from_major(25_000),
        AmortizationMethod::Flat,
    );
    let flat_result = solve(&flat)?;
    println!(
        "same quote as flat rate: {}% per annum",
        flat_result.annual_rate.as_percentage().round_dp(2)
    );

    println!("{}", result.to_json()?);

    Ok(())
}
