use crate::infra::{build_engine, parse_education, parse_self_employed};
use clap::Args;
use loan_approval::config::AppConfig;
use loan_approval::decision::{
    ApplicationForm, DecisionEngine, DecisionView, Education, SelfEmployed,
};
use loan_approval::error::AppError;
use loan_approval::Classifier;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Number of dependents (0-5)
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: i64,
    /// Education: "Graduated" or "Not Graduated"
    #[arg(long, value_parser = parse_education, default_value = "Graduated")]
    pub(crate) education: Education,
    /// Self employed: "Yes" or "No"
    #[arg(long, value_parser = parse_self_employed, default_value = "No")]
    pub(crate) self_employed: SelfEmployed,
    /// Annual income in currency units
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Total assets in currency units
    #[arg(long, default_value_t = 0.0)]
    pub(crate) total_assets: f64,
    /// CIBIL score (300-900)
    #[arg(long, default_value_t = 750)]
    pub(crate) cibil_score: i64,
    /// Requested loan amount in currency units
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan tenure in years (1-20)
    #[arg(long)]
    pub(crate) tenure_years: i64,
    /// Directory holding scaler.json and model.json
    #[arg(long)]
    pub(crate) artifacts: Option<PathBuf>,
    /// Print the decision as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory holding scaler.json and model.json
    #[arg(long)]
    pub(crate) artifacts: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config, args.artifacts.clone())?;

    let form = ApplicationForm {
        dependents: args.dependents,
        education: args.education,
        self_employed: args.self_employed,
        annual_income: args.annual_income,
        total_assets: args.total_assets,
        cibil_score: args.cibil_score,
        loan_amount: args.loan_amount,
        tenure_years: args.tenure_years,
    };

    let view = evaluate_form(&engine, &form)?;
    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Decision payload unavailable: {err}"),
        }
    } else {
        for line in view.to_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config, args.artifacts)?;

    println!("Smart loan approval demo");
    println!(
        "Interest rate {:.2}% p.a. | income floor {} | CIBIL floor {}",
        engine.policy().annual_interest_rate * 100.0,
        engine.policy().minimum_annual_income,
        engine.policy().minimum_cibil_score
    );

    for (label, form) in demo_applicants() {
        println!("\n{label}");
        match evaluate_form(&engine, &form) {
            Ok(view) => {
                for line in view.to_lines() {
                    println!("  {line}");
                }
            }
            Err(err) => println!("  Evaluation unavailable: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn evaluate_form<C: Classifier>(
    engine: &DecisionEngine<C>,
    form: &ApplicationForm,
) -> Result<DecisionView, AppError> {
    let application = form.validate()?;
    let result = engine.evaluate(&application)?;
    Ok(DecisionView::render(&application, &result))
}

fn demo_applicants() -> Vec<(&'static str, ApplicationForm)> {
    vec![
        (
            "Salaried graduate, modest loan",
            ApplicationForm {
                dependents: 2,
                education: Education::Graduated,
                self_employed: SelfEmployed::No,
                annual_income: 1_800_000.0,
                total_assets: 6_500_000.0,
                cibil_score: 812,
                loan_amount: 1_000_000.0,
                tenure_years: 10,
            },
        ),
        (
            "Entry-level income at the eligibility floor",
            ApplicationForm {
                dependents: 2,
                education: Education::Graduated,
                self_employed: SelfEmployed::No,
                annual_income: 300_000.0,
                total_assets: 500_000.0,
                cibil_score: 655,
                loan_amount: 1_000_000.0,
                tenure_years: 20,
            },
        ),
        (
            "Low income, thin credit, oversized request",
            ApplicationForm {
                dependents: 3,
                education: Education::NotGraduated,
                self_employed: SelfEmployed::Yes,
                annual_income: 200_000.0,
                total_assets: 400_000.0,
                cibil_score: 600,
                loan_amount: 2_000_000.0,
                tenure_years: 5,
            },
        ),
    ]
}
