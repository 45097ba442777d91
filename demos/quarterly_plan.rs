use planning_core::{
    error::Result,
    models::{
        employee::Employee,
        project::Project,
    },
    stats::PlanningStatistics,
    system::planning::PlanningSystem,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a small plan for the first quarter and compute its statistics.
///
/// In a real application the employees, projects and commitments would come
/// from a loader (see `planning_core::import` with the `with_serde` feature)
/// but here we register everything by hand.
fn example() -> Result<(PlanningSystem, PlanningStatistics)> {
    let system = PlanningSystem::builder("q1-roadworks", 2020)
        .add_employee(Employee::new(1, "Anna", Decimal::from(20))?)?
        .add_employee(Employee::new(2, "Bram", Decimal::from(30))?)?
        .add_employee(Employee::new(3, "Cas", Decimal::from(26))?)?
        .add_employee(Employee::new(4, "Dirk", Decimal::from(40))?)?
        // projects need a registered manager
        .add_project(Project::new("ALPHA", "Bridge", date(2020, 3, 2), date(2020, 3, 6))?, 1)?
        .add_project(Project::new("BETA", "Tunnel", date(2020, 3, 30), date(2020, 4, 3))?, 3)?
        .add_project(Project::new("GAMMA", "Highway", date(2020, 1, 1), date(2020, 3, 31))?, 1)?
        // commitments need a registered project and employee
        .add_commitment("ALPHA", 1, 8)?
        .add_commitment("ALPHA", 2, 4)?
        .add_commitment("BETA", 3, 4)?
        .add_commitment("BETA", 4, 2)?
        .add_commitment("GAMMA", 2, 8)?
        .add_commitment("GAMMA", 1, 2)?
        .build();
    let stats = system.statistics()?;
    Ok((system, stats))
}

fn main() {
    let (system, stats) = example().unwrap();
    println!("Statistics of '{}' in {} ({})", stats.name(), stats.year(), system);
    println!("average hourly wage: {}", stats.average_hourly_wage().round_dp(2));
    println!("longest project: {} ({} working days)", stats.longest_project(), stats.longest_project_working_days());
    println!("most involved ({} projects): {:?}", stats.most_involved_count(), stats.most_involved_employees());
    println!("total manpower budget: {}", stats.total_manpower_budget());
    for (number, budget) in stats.junior_managed_budgets() {
        println!("  junior manager {}: {}", number, budget);
    }
    println!("full-time employees: {:?}", stats.fulltime_employees());
    for (month, spend) in stats.monthly_spends() {
        println!("  {}: {}", month, spend);
    }
}
