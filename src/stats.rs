//! This module holds the statistics computed over a loaded plan.
//!
//! Every function here takes a built [PlanningSystem] and only reads it, so
//! they can be called in any order (or from several threads at once) and will
//! always agree with each other. Nothing is cached; each call works from the
//! plan as it stands.
//!
//! [PlanningSystem]: ../system/planning/struct.PlanningSystem.html

use crate::{
    error::{Error, Result},
    models::{
        employee::{Employee, EmployeeNumber},
        project::{Project, ProjectCode},
    },
    system::planning::PlanningSystem,
    util::calendar::YearMonth,
};
use getset::Getters;
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The mean hourly wage over every employee in the plan.
pub fn average_hourly_wage(system: &PlanningSystem) -> Result<Decimal> {
    let employees = system.employees();
    if employees.is_empty() {
        Err(Error::EmptyPopulation("employees".into()))?;
    }
    let overflow = || Error::Overflow("average hourly wage".into());
    let total = employees.values()
        .try_fold(Decimal::zero(), |acc, employee| acc.checked_add(*employee.hourly_wage()))
        .ok_or_else(overflow)?;
    total.checked_div(Decimal::from(employees.len() as u64))
        .ok_or_else(overflow)
}

/// The project with the most working days. When several projects tie, the
/// first one by project code wins.
pub fn longest_project(system: &PlanningSystem) -> Option<&Project> {
    system.projects().values()
        .fold(None::<&Project>, |longest, project| {
            match longest {
                Some(current) if current.num_working_days() >= project.num_working_days() => Some(current),
                _ => Some(project),
            }
        })
}

/// The highest number of projects any one employee is assigned to.
pub fn most_involved_count(system: &PlanningSystem) -> usize {
    system.employees().values()
        .map(|employee| employee.assigned_projects().len())
        .max()
        .unwrap_or(0)
}

/// Every employee assigned to [most_involved_count](fn.most_involved_count.html)
/// projects. Ties are all included, in employee number order.
pub fn most_involved_employees(system: &PlanningSystem) -> Vec<&Employee> {
    let most = most_involved_count(system);
    system.employees().values()
        .filter(|employee| employee.assigned_projects().len() == most)
        .collect()
}

/// The budget of every project in the plan, added up through the managers.
///
/// Each project has exactly one manager, so summing managed budgets counts
/// every project exactly once no matter how many projects a manager runs.
pub fn total_manpower_budget(system: &PlanningSystem) -> Result<Decimal> {
    managed_budget_overview(system, Employee::has_projects)?.values()
        .try_fold(Decimal::zero(), |acc, budget| acc.checked_add(*budget))
        .ok_or_else(|| Error::Overflow("total manpower budget".into()))
}

/// Map each employee matching `filter` to the total budget of the projects
/// they manage. Employees that match but manage nothing show up with zero.
pub fn managed_budget_overview<F>(system: &PlanningSystem, filter: F) -> Result<BTreeMap<EmployeeNumber, Decimal>>
    where F: Fn(&Employee) -> bool,
{
    system.employees().values()
        .filter(|employee| filter(*employee))
        .map(|employee| {
            employee.calculate_managed_budget(system)
                .map(|budget| (*employee.number(), budget))
        })
        .collect()
}

/// Employees with at least `threshold` hours per day on any single project.
/// Hours on different projects are not added together.
pub fn fulltime_employees(system: &PlanningSystem, threshold: u32) -> Vec<&Employee> {
    let numbers = system.projects().values()
        .flat_map(|project| project.commitments().values())
        .filter(|commitment| commitment.is_fulltime(threshold))
        .map(|commitment| commitment.employee())
        .collect::<BTreeSet<_>>();
    numbers.into_iter()
        .filter_map(|number| system.employees().get(&number))
        .collect()
}

/// What the whole plan spends in each month. Each project's budget is spread
/// over the months it runs in by working days, so a month's spend is the sum
/// of (working days in that month × daily cost) over every project.
///
/// Months in which no project has a working day are left out. Months where
/// projects run but nobody is committed show up as zero.
pub fn cumulative_monthly_spends(system: &PlanningSystem) -> Result<BTreeMap<YearMonth, Decimal>> {
    let mut spends: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for project in system.projects().values() {
        for (month, spend) in project.monthly_spends()? {
            let entry = spends.entry(month).or_insert(Decimal::zero());
            *entry = entry.checked_add(spend)
                .ok_or_else(|| Error::Overflow(format!("{} spend", month)))?;
        }
    }
    Ok(spends)
}

/// A summary of every statistic for one plan, ready to be rendered.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct PlanningStatistics {
    name: String,
    year: i32,
    num_employees: usize,
    num_projects: usize,
    average_hourly_wage: Decimal,
    longest_project: ProjectCode,
    longest_project_working_days: u32,
    most_involved_count: usize,
    most_involved_employees: Vec<EmployeeNumber>,
    total_manpower_budget: Decimal,
    /// Managed budgets of the employees at or below the junior wage ceiling
    junior_managed_budgets: BTreeMap<EmployeeNumber, Decimal>,
    fulltime_employees: Vec<EmployeeNumber>,
    monthly_spends: BTreeMap<YearMonth, Decimal>,
}

/// Compute every statistic for the plan in one go. Fails if the plan has no
/// employees or no projects.
pub fn statistics(system: &PlanningSystem) -> Result<PlanningStatistics> {
    if system.employees().is_empty() {
        Err(Error::EmptyPopulation("employees".into()))?;
    }
    let longest = longest_project(system)
        .ok_or_else(|| Error::EmptyPopulation("projects".into()))?;
    let params = system.parameters();
    let numbers = |employees: Vec<&Employee>| {
        employees.into_iter().map(|employee| *employee.number()).collect::<Vec<_>>()
    };
    Ok(PlanningStatistics {
        name: system.name().clone(),
        year: *system.year(),
        num_employees: system.employees().len(),
        num_projects: system.projects().len(),
        average_hourly_wage: average_hourly_wage(system)?,
        longest_project: longest.code().clone(),
        longest_project_working_days: longest.num_working_days(),
        most_involved_count: most_involved_count(system),
        most_involved_employees: numbers(most_involved_employees(system)),
        total_manpower_budget: total_manpower_budget(system)?,
        junior_managed_budgets: managed_budget_overview(system, |employee| params.is_junior(employee))?,
        fulltime_employees: numbers(fulltime_employees(system, params.fulltime_hours())),
        monthly_spends: cumulative_monthly_spends(system)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn month(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn numbers(employees: Vec<&Employee>) -> Vec<u32> {
        employees.into_iter().map(|employee| employee.number().value()).collect()
    }

    #[test]
    fn standard_scenario() {
        let system = make_standard_system();
        let project = system.project("P1").unwrap();
        assert_eq!(project.num_working_days(), 5);
        assert_eq!(project.calculate_manpower_budget(), Ok(num!(1400)));
        assert_eq!(average_hourly_wage(&system), Ok(num!(25)));
        assert_eq!(total_manpower_budget(&system), Ok(num!(1400)));
        assert_eq!(numbers(fulltime_employees(&system, 8)), vec![1]);
        assert_eq!(longest_project(&system).unwrap().code().as_str(), "P1");
        // anna manages and is committed, bram is committed
        assert_eq!(most_involved_count(&system), 1);
        assert_eq!(numbers(most_involved_employees(&system)), vec![1, 2]);
    }

    #[test]
    fn average_wage() {
        let system = make_portfolio_system();
        assert_eq!(average_hourly_wage(&system), Ok(num!(29)));

        // insertion order doesn't matter
        let reversed = PlanningSystem::builder("reversed", 2020)
            .add_employee(make_employee(4, "Dirk", num!(40))).unwrap()
            .add_employee(make_employee(3, "Cas", num!(26))).unwrap()
            .add_employee(make_employee(2, "Bram", num!(30))).unwrap()
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .build();
        assert_eq!(average_hourly_wage(&reversed), Ok(num!(29)));

        let uneven = PlanningSystem::builder("uneven", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .add_employee(make_employee(2, "Bram", num!(21.5))).unwrap()
            .build();
        assert_eq!(average_hourly_wage(&uneven), Ok(num!(20.75)));

        let empty = PlanningSystem::builder("empty", 2020).build();
        assert_eq!(average_hourly_wage(&empty), Err(Error::EmptyPopulation("employees".into())));
    }

    #[test]
    fn longest() {
        let system = make_portfolio_system();
        let longest = longest_project(&system).unwrap();
        assert_eq!(longest.code().as_str(), "GAMMA");
        assert_eq!(longest.num_working_days(), 65);

        let empty = PlanningSystem::builder("empty", 2020).build();
        assert!(longest_project(&empty).is_none());
    }

    #[test]
    fn longest_ties_go_to_first_code() {
        let system = PlanningSystem::builder("ties", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .add_project(make_project("ZULU", "Last", date(2020, 3, 2), date(2020, 3, 6)), 1).unwrap()
            .add_project(make_project("MIKE", "Middle", date(2020, 4, 6), date(2020, 4, 10)), 1).unwrap()
            .add_project(make_project("ECHO", "Short", date(2020, 5, 4), date(2020, 5, 5)), 1).unwrap()
            .build();
        assert_eq!(longest_project(&system).unwrap().code().as_str(), "MIKE");
    }

    #[test]
    fn most_involved() {
        let system = make_portfolio_system();
        let count = most_involved_count(&system);
        let most = most_involved_employees(&system);
        assert_eq!(count, 2);
        assert_eq!(numbers(most.clone()), vec![1, 2]);
        for employee in &most {
            assert_eq!(employee.assigned_projects().len(), count);
        }
        for employee in system.employees().values() {
            assert!(employee.assigned_projects().len() <= count);
        }

        let empty = PlanningSystem::builder("empty", 2020).build();
        assert_eq!(most_involved_count(&empty), 0);
        assert!(most_involved_employees(&empty).is_empty());

        // employees without any projects still count as most involved if
        // nobody has any
        let idle = PlanningSystem::builder("idle", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .add_employee(make_employee(2, "Bram", num!(30))).unwrap()
            .build();
        assert_eq!(most_involved_count(&idle), 0);
        assert_eq!(numbers(most_involved_employees(&idle)), vec![1, 2]);
    }

    #[test]
    fn total_budget_counts_each_project_once() {
        let system = make_portfolio_system();
        let by_project = system.projects().values()
            .fold(Decimal::zero(), |acc, project| acc + project.calculate_manpower_budget().unwrap());
        assert_eq!(by_project, num!(20520));
        assert_eq!(total_manpower_budget(&system), Ok(by_project));

        let empty = PlanningSystem::builder("empty", 2020).build();
        assert_eq!(total_manpower_budget(&empty), Ok(Decimal::zero()));
    }

    #[test]
    fn managed_overview() {
        let system = make_portfolio_system();

        let managers = managed_budget_overview(&system, Employee::has_projects).unwrap();
        assert_eq!(managers.len(), 2);
        assert_eq!(managers.get(&EmployeeNumber::new(1u32)), Some(&num!(19600)));
        assert_eq!(managers.get(&EmployeeNumber::new(3u32)), Some(&num!(920)));

        let everyone = managed_budget_overview(&system, |_| true).unwrap();
        assert_eq!(everyone.keys().map(|number| number.value()).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(everyone.get(&EmployeeNumber::new(2u32)), Some(&num!(0)));

        let juniors = managed_budget_overview(&system, |employee| employee.hourly_wage() <= &num!(26)).unwrap();
        assert_eq!(juniors.keys().map(|number| number.value()).collect::<Vec<_>>(), vec![1, 3]);

        let nobody = managed_budget_overview(&system, |_| false).unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn fulltime() {
        let system = make_portfolio_system();
        assert_eq!(numbers(fulltime_employees(&system, 8)), vec![1, 2]);
        assert_eq!(numbers(fulltime_employees(&system, 4)), vec![1, 2, 3]);
        assert_eq!(numbers(fulltime_employees(&system, 9)), Vec::<u32>::new());
        assert_eq!(numbers(system.fulltime_employees()), vec![1, 2]);
    }

    #[test]
    fn fulltime_does_not_add_projects_together() {
        let system = PlanningSystem::builder("split", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .add_project(make_project("P1", "Bridge", date(2020, 3, 2), date(2020, 3, 6)), 1).unwrap()
            .add_project(make_project("P2", "Tunnel", date(2020, 3, 2), date(2020, 3, 6)), 1).unwrap()
            .add_commitment("P1", 1, 4).unwrap()
            .add_commitment("P2", 1, 4).unwrap()
            .build();
        assert!(fulltime_employees(&system, 8).is_empty());
    }

    #[test]
    fn monthly_spends() {
        let system = make_portfolio_system();
        let spends = cumulative_monthly_spends(&system).unwrap();
        assert_eq!(spends.len(), 4);
        assert_eq!(spends.get(&month(2020, 1)), Some(&num!(6440)));
        assert_eq!(spends.get(&month(2020, 2)), Some(&num!(5600)));
        assert_eq!(spends.get(&month(2020, 3)), Some(&num!(7928)));
        assert_eq!(spends.get(&month(2020, 4)), Some(&num!(552)));
        let total = spends.values().fold(Decimal::zero(), |acc, spend| acc + *spend);
        assert_eq!(Ok(total), total_manpower_budget(&system));
    }

    #[test]
    fn monthly_spends_cross_years() {
        let system = PlanningSystem::builder("new year", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .add_project(make_project("P1", "Bridge", date(2019, 12, 30), date(2020, 1, 3)), 1).unwrap()
            .add_project(make_project("P2", "Idle", date(2020, 2, 3), date(2020, 2, 4)), 1).unwrap()
            .add_commitment("P1", 1, 8).unwrap()
            .build();
        let spends = cumulative_monthly_spends(&system).unwrap();
        assert_eq!(spends.keys().cloned().collect::<Vec<_>>(), vec![month(2019, 12), month(2020, 1), month(2020, 2)]);
        assert_eq!(spends.get(&month(2019, 12)), Some(&num!(320)));
        assert_eq!(spends.get(&month(2020, 1)), Some(&num!(480)));
        // a project with nobody on it still runs, it just costs nothing
        assert_eq!(spends.get(&month(2020, 2)), Some(&num!(0)));

        let empty = PlanningSystem::builder("empty", 2020).build();
        assert!(cumulative_monthly_spends(&empty).unwrap().is_empty());
    }

    #[test]
    fn full_statistics() {
        let system = make_portfolio_system();
        let stats = statistics(&system).unwrap();
        assert_eq!(stats.name(), "portfolio");
        assert_eq!(stats.year(), &2020);
        assert_eq!(stats.num_employees(), &4);
        assert_eq!(stats.num_projects(), &3);
        assert_eq!(stats.average_hourly_wage(), &num!(29));
        assert_eq!(stats.longest_project().as_str(), "GAMMA");
        assert_eq!(stats.longest_project_working_days(), &65);
        assert_eq!(stats.most_involved_count(), &2);
        assert_eq!(stats.most_involved_employees(), &vec![EmployeeNumber::new(1u32), EmployeeNumber::new(2u32)]);
        assert_eq!(stats.total_manpower_budget(), &num!(20520));
        assert_eq!(stats.junior_managed_budgets().len(), 2);
        assert_eq!(stats.junior_managed_budgets().get(&EmployeeNumber::new(1u32)), Some(&num!(19600)));
        assert_eq!(stats.junior_managed_budgets().get(&EmployeeNumber::new(3u32)), Some(&num!(920)));
        assert_eq!(stats.fulltime_employees(), &vec![EmployeeNumber::new(1u32), EmployeeNumber::new(2u32)]);
        assert_eq!(Ok(stats.monthly_spends().clone()), cumulative_monthly_spends(&system));
        assert_eq!(system.statistics(), Ok(stats));
    }

    #[test]
    fn statistics_need_employees_and_projects() {
        let empty = PlanningSystem::builder("empty", 2020).build();
        assert_eq!(statistics(&empty), Err(Error::EmptyPopulation("employees".into())));

        let no_projects = PlanningSystem::builder("staff only", 2020)
            .add_employee(make_employee(1, "Anna", num!(20))).unwrap()
            .build();
        assert_eq!(statistics(&no_projects), Err(Error::EmptyPopulation("projects".into())));
    }

    #[test]
    fn huge_wages_fail_instead_of_panicking() {
        let wages = PlanningSystem::builder("huge", 2020)
            .add_employee(make_employee(1, "Anna", Decimal::MAX)).unwrap()
            .add_employee(make_employee(2, "Bram", Decimal::MAX)).unwrap()
            .build();
        assert_eq!(average_hourly_wage(&wages), Err(Error::Overflow("average hourly wage".into())));

        let system = PlanningSystem::builder("huge", 2020)
            .add_employee(make_employee(1, "Anna", Decimal::MAX)).unwrap()
            .add_project(make_project("P1", "Bridge", date(2020, 3, 2), date(2020, 3, 6)), 1).unwrap()
            .add_commitment("P1", 1, 8).unwrap()
            .build();
        let overflow = Error::Overflow("daily cost of employee 1 on project P1".into());
        assert_eq!(total_manpower_budget(&system).unwrap_err(), overflow);
        assert_eq!(managed_budget_overview(&system, |_| true).unwrap_err(), overflow);
        assert_eq!(cumulative_monthly_spends(&system).unwrap_err(), overflow);
        assert_eq!(statistics(&system).unwrap_err(), overflow);
    }

    #[test]
    fn spends_overflow_across_projects() {
        // each project fits on its own, the sum of both does not
        let big = Decimal::MAX / num!(5);
        let system = PlanningSystem::builder("huge", 2020)
            .add_employee(make_employee(1, "Anna", big)).unwrap()
            .add_project(make_project("P1", "Bridge", date(2020, 3, 2), date(2020, 3, 6)), 1).unwrap()
            .add_project(make_project("P2", "Tunnel", date(2020, 3, 9), date(2020, 3, 13)), 1).unwrap()
            .add_commitment("P1", 1, 1).unwrap()
            .add_commitment("P2", 1, 1).unwrap()
            .build();
        assert!(system.project("P1").unwrap().calculate_manpower_budget().is_ok());
        assert!(system.project("P2").unwrap().calculate_manpower_budget().is_ok());
        assert_eq!(total_manpower_budget(&system), Err(Error::Overflow("managed budget of employee 1".into())));
        assert_eq!(cumulative_monthly_spends(&system), Err(Error::Overflow("2020-03 spend".into())));
    }
}
